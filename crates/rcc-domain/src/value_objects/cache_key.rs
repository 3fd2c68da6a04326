//! Content-addressed cache keys

use crate::constants::CACHE_NAMESPACE_SEPARATOR;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Cache key derived from payload content
///
/// Rendered as `"{namespace}:{hex}"` where `hex` is the lowercase SHA-256
/// digest of the exact payload bytes. For a fixed namespace two payloads
/// map to the same key iff they are byte-identical.
///
/// # Example
///
/// ```
/// use rcc_domain::CacheKey;
///
/// let key = CacheKey::derive("text-processing", "senior engineer");
/// assert!(key.as_str().starts_with("text-processing:"));
/// assert_eq!(key.digest().len(), 64);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CacheKey(String);

impl CacheKey {
    /// Derive the key for `payload` within `namespace`
    pub fn derive(namespace: &str, payload: &str) -> Self {
        let digest = Sha256::digest(payload.as_bytes());
        Self(format!(
            "{namespace}{CACHE_NAMESPACE_SEPARATOR}{}",
            hex::encode(digest)
        ))
    }

    /// The full key as stored
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The namespace portion of the key
    pub fn namespace(&self) -> &str {
        self.0
            .rsplit_once(CACHE_NAMESPACE_SEPARATOR)
            .map_or("", |(ns, _)| ns)
    }

    /// The hexadecimal digest portion of the key
    pub fn digest(&self) -> &str {
        self.0
            .rsplit_once(CACHE_NAMESPACE_SEPARATOR)
            .map_or(self.0.as_str(), |(_, digest)| digest)
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CacheKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
