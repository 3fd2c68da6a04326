//! Application Service Port Interfaces
//!
//! Contracts that application services implement and the server consumes.

use crate::error::Result;
use crate::value_objects::{CachePolicy, ProcessedText};
use async_trait::async_trait;

/// Text Processing Service Interface
///
/// Cache-or-compute contract for text analysis.
#[async_trait]
pub trait TextProcessingServiceInterface: Send + Sync {
    /// Serve the analysis of `text` from the store or compute it
    ///
    /// Store failures never surface here: they degrade to computing a
    /// fresh result. The only error a caller can see comes from the
    /// computation itself.
    async fn process(&self, text: &str, policy: CachePolicy) -> Result<ProcessedText>;
}
