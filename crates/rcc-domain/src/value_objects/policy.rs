//! Caching policy

use serde::{Deserialize, Serialize};

/// Whether a single call may consult and populate the cache store
///
/// The policy is decided per call and never influences the derived
/// [`CacheKey`](super::CacheKey).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CachePolicy {
    /// Look up the store first and write back on a miss
    UseCache,
    /// Always compute; never read or write the store
    Bypass,
}

impl CachePolicy {
    /// Check if the store should be consulted
    pub fn uses_cache(self) -> bool {
        matches!(self, Self::UseCache)
    }
}

impl From<bool> for CachePolicy {
    fn from(use_cache: bool) -> Self {
        if use_cache {
            Self::UseCache
        } else {
            Self::Bypass
        }
    }
}
