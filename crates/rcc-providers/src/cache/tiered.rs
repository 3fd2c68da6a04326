//! Tiered cache provider
//!
//! Keeps a short-lived in-process copy of entries in front of a shared
//! remote store. Reads try the local tier first and back-fill it from the
//! remote tier on a remote hit, for no longer than the remote entry has
//! left to live. Writes go to both tiers; the remote write
//! decides the outcome.

use crate::cache::moka::MokaCacheProvider;
use crate::cache::redis::RedisCacheProvider;
use crate::constants::{CACHE_DEFAULT_SIZE_LIMIT, TIERED_LOCAL_TTL_SECS};
use async_trait::async_trait;
use rcc_application::ports::providers::cache::{CacheEntryConfig, CacheProvider};
use rcc_application::ports::registry::{CacheProviderConfig, CacheProviderEntry};
use rcc_domain::error::Result;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Local Moka tier backed by a remote provider
#[derive(Clone)]
pub struct TieredCacheProvider {
    local: MokaCacheProvider,
    remote: Arc<dyn CacheProvider>,
    local_ttl_cap: Duration,
}

impl TieredCacheProvider {
    /// Put a local tier of `local_capacity` bytes in front of `remote`
    pub fn new(remote: Arc<dyn CacheProvider>, local_capacity: usize) -> Self {
        Self {
            local: MokaCacheProvider::with_capacity(local_capacity),
            remote,
            local_ttl_cap: Duration::from_secs(TIERED_LOCAL_TTL_SECS),
        }
    }

    /// Override the upper bound on how long the local tier keeps an entry
    #[must_use]
    pub fn with_local_ttl_cap(mut self, cap: Duration) -> Self {
        self.local_ttl_cap = cap;
        self
    }

    /// Local entries never outlive the remote entry or the cap
    fn local_config(&self, config: CacheEntryConfig) -> CacheEntryConfig {
        let ttl = config.effective_ttl();
        let capped = if ttl.is_zero() {
            self.local_ttl_cap
        } else {
            ttl.min(self.local_ttl_cap)
        };
        CacheEntryConfig::new().with_ttl(capped)
    }

    async fn fill_local(&self, key: &str, value: &str, config: CacheEntryConfig) {
        if let Err(e) = self
            .local
            .set_json(key, value, self.local_config(config))
            .await
        {
            debug!(key, error = %e, "Skipped local tier fill");
        }
    }
}

#[async_trait]
impl CacheProvider for TieredCacheProvider {
    async fn get_json(&self, key: &str) -> Result<Option<String>> {
        if let Some(value) = self.local.get_json(key).await? {
            return Ok(Some(value));
        }

        let value = self.remote.get_json(key).await?;
        if let Some(value) = value.as_deref() {
            // A copy may live only as long as the remote entry has left
            match self.remote.ttl(key).await {
                Ok(Some(remaining)) => {
                    let config = CacheEntryConfig::new().with_ttl(remaining);
                    self.fill_local(key, value, config).await;
                }
                Ok(None) => debug!(key, "Remote expiry unknown, local tier not filled"),
                Err(e) => debug!(key, error = %e, "Remote expiry lookup failed, local tier not filled"),
            }
        }
        Ok(value)
    }

    async fn set_json(&self, key: &str, value: &str, config: CacheEntryConfig) -> Result<()> {
        self.fill_local(key, value, config).await;
        self.remote.set_json(key, value, config).await
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        let local = self.local.delete(key).await?;
        let remote = self.remote.delete(key).await?;
        Ok(local || remote)
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        if self.local.exists(key).await? {
            return Ok(true);
        }
        self.remote.exists(key).await
    }

    async fn ttl(&self, key: &str) -> Result<Option<Duration>> {
        self.remote.ttl(key).await
    }

    async fn ping(&self) -> Result<()> {
        self.remote.ping().await.inspect_err(|e| {
            warn!(remote = self.remote.provider_name(), error = %e, "Remote tier unreachable");
        })
    }

    fn provider_name(&self) -> &str {
        "tiered"
    }
}

impl std::fmt::Debug for TieredCacheProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TieredCacheProvider")
            .field("local", &self.local)
            .field("remote", &self.remote.provider_name())
            .field("local_ttl_cap", &self.local_ttl_cap)
            .finish()
    }
}

fn tiered_cache_factory(
    config: &CacheProviderConfig,
) -> std::result::Result<Arc<dyn CacheProvider>, String> {
    let uri = config
        .uri
        .as_deref()
        .ok_or_else(|| "Tiered cache requires a Redis URI".to_string())?;

    let remote = RedisCacheProvider::new(uri)
        .map_err(|e| format!("Failed to create Redis provider: {e}"))?;
    let capacity = config.max_size.unwrap_or(CACHE_DEFAULT_SIZE_LIMIT);

    Ok(Arc::new(TieredCacheProvider::new(Arc::new(remote), capacity)))
}

pub(crate) const TIERED_PROVIDER: CacheProviderEntry = CacheProviderEntry {
    name: "tiered",
    description: "In-memory Moka tier in front of Redis",
    factory: tiered_cache_factory,
};
