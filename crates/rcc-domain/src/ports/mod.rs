//! Ports
//!
//! Traits the domain owns and outer crates implement. `providers` covers
//! the result store and the analysis backend; `services` is what the HTTP
//! layer calls.

pub mod providers;
pub mod services;

pub use providers::{CacheEntryConfig, CacheProvider, TextAnalysisProvider};
pub use services::TextProcessingServiceInterface;
