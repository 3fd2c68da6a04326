//! External Provider Ports
//!
//! Ports for external services the domain depends on.
//!
//! ## Provider Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | CacheProvider | Key-value store with per-entry expiry and liveness check |
//! | TextAnalysisProvider | The (expensive) computation whose results are cached |

/// Text analysis provider port
pub mod analysis;
/// Cache store provider port
pub mod cache;

pub use analysis::TextAnalysisProvider;
pub use cache::{CacheEntryConfig, CacheProvider};
