//! Store used when caching is disabled

use std::sync::Arc;

use async_trait::async_trait;
use rcc_application::ports::providers::cache::{CacheEntryConfig, CacheProvider};
use rcc_application::ports::registry::CacheProviderEntry;
use rcc_domain::error::{Error, Result};

/// Discards writes and misses on every read
///
/// There is no store to reach, so `ping` always fails.
///
/// ```rust
/// use rcc_providers::cache::NullCacheProvider;
/// use rcc_providers::cache::CacheProvider;
///
/// assert_eq!(NullCacheProvider.provider_name(), "null");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCacheProvider;

impl NullCacheProvider {
    /// Unit constructor
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CacheProvider for NullCacheProvider {
    async fn get_json(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    async fn set_json(&self, _: &str, _: &str, _: CacheEntryConfig) -> Result<()> {
        Ok(())
    }

    async fn delete(&self, _key: &str) -> Result<bool> {
        Ok(false)
    }

    async fn exists(&self, _key: &str) -> Result<bool> {
        Ok(false)
    }

    async fn ping(&self) -> Result<()> {
        Err(Error::cache("Caching is disabled; no result store configured"))
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}

pub(crate) const NULL_PROVIDER: CacheProviderEntry = CacheProviderEntry {
    name: "null",
    description: "Stores nothing; every lookup misses",
    factory: |_| Ok(Arc::new(NullCacheProvider)),
};
