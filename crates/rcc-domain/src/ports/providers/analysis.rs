//! Text Analysis Provider Port

use crate::error::Result;
use crate::value_objects::TextAnalysis;
use async_trait::async_trait;

/// Text analysis interface
///
/// The expensive computation sitting behind the cache. Implementations
/// must be deterministic: the same input always yields the same report,
/// so concurrent duplicate computations and redundant write-backs are
/// harmless.
#[async_trait]
pub trait TextAnalysisProvider: Send + Sync {
    /// Analyze the raw input text
    async fn analyze(&self, text: &str) -> Result<TextAnalysis>;

    /// Get the name/identifier of this provider implementation
    fn provider_name(&self) -> &str;
}
