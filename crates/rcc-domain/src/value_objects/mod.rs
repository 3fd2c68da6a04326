//! Domain Value Objects
//!
//! Immutable value objects that represent concepts in the domain
//! without identity.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`CacheKey`] | Namespaced SHA-256 digest addressing a stored result |
//! | [`CachePolicy`] | Per-call switch for consulting the store |
//! | [`TextAnalysis`] | The payload persisted in the store |
//! | [`ProcessedText`] | The payload plus timing and cache-hit metadata returned to callers |

/// Analysis payload and processing result value objects
pub mod analysis;
/// Content-addressed cache key
pub mod cache_key;
/// Caching policy switch
pub mod policy;

pub use analysis::{ProcessedText, TextAnalysis};
pub use cache_key::CacheKey;
pub use policy::CachePolicy;
