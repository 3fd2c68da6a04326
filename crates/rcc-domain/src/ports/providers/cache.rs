//! Result store port
//!
//! Values cross this boundary as JSON text. Expiry belongs to the store:
//! callers set a TTL when writing and reads never renew it.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_CACHE_TTL_SECS;
use crate::error::Result;

/// Per-write options
///
/// ```
/// use rcc_domain::ports::providers::cache::CacheEntryConfig;
/// use std::time::Duration;
///
/// let entry = CacheEntryConfig::default().with_ttl_secs(60);
/// assert_eq!(entry.effective_ttl(), Duration::from_secs(60));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntryConfig {
    /// Expiry; `None` falls back to one hour
    pub ttl: Option<Duration>,
}

impl CacheEntryConfig {
    /// One-hour expiry
    pub fn new() -> Self {
        Self::default()
    }

    /// Expire after `ttl`
    #[must_use]
    pub fn with_ttl(self, ttl: Duration) -> Self {
        Self { ttl: Some(ttl) }
    }

    /// Expire after `secs` seconds
    #[must_use]
    pub fn with_ttl_secs(self, secs: u64) -> Self {
        self.with_ttl(Duration::from_secs(secs))
    }

    /// The TTL stores should apply
    pub fn effective_ttl(&self) -> Duration {
        self.ttl
            .unwrap_or_else(|| Duration::from_secs(DEFAULT_CACHE_TTL_SECS))
    }
}

impl Default for CacheEntryConfig {
    fn default() -> Self {
        Self {
            ttl: Some(Duration::from_secs(DEFAULT_CACHE_TTL_SECS)),
        }
    }
}

/// A key/value store holding JSON text with expiry
///
/// One instance is built at startup and shared behind an `Arc`.
///
/// ```ignore
/// store.set_json("text-processing:ab12", r#"{"result":"..."}"#, CacheEntryConfig::default()).await?;
/// let cached = store.get_json("text-processing:ab12").await?;
/// ```
#[async_trait]
pub trait CacheProvider: Send + Sync + std::fmt::Debug {
    /// Stored text for `key`, or `None` when absent or expired
    async fn get_json(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key` in one set-with-expiry command
    async fn set_json(&self, key: &str, value: &str, config: CacheEntryConfig) -> Result<()>;

    /// Remove `key`; `false` when there was nothing to remove
    async fn delete(&self, key: &str) -> Result<bool>;

    /// Whether a live entry exists for `key`
    async fn exists(&self, key: &str) -> Result<bool>;

    /// Time left before `key` expires
    ///
    /// `None` when the entry is absent, never expires, or the store cannot
    /// tell. Copies of an entry must not be kept longer than this.
    async fn ttl(&self, _key: &str) -> Result<Option<Duration>> {
        Ok(None)
    }

    /// Round trip to the backing store
    async fn ping(&self) -> Result<()>;

    /// Registered name, such as `redis` or `moka`
    fn provider_name(&self) -> &str;
}
