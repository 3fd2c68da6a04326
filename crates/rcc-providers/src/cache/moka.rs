//! In-process store backed by moka
//!
//! Each entry expires after the TTL it was written with; reads never extend
//! it. Capacity is a byte budget over key and value lengths.

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use moka::Expiry;
use moka::future::Cache;
use rcc_application::ports::providers::cache::{CacheEntryConfig, CacheProvider};
use rcc_application::ports::registry::{CacheProviderConfig, CacheProviderEntry};
use rcc_domain::error::{Error, Result};

use crate::constants::CACHE_DEFAULT_SIZE_LIMIT;

/// A stored JSON value, the TTL it was written with and its deadline
#[derive(Clone)]
struct StoredValue {
    json: Arc<str>,
    ttl: Option<Duration>,
    expires_at: Option<Instant>,
}

/// Expires each entry after the TTL supplied at write time
struct PerEntryTtl;

impl Expiry<String, StoredValue> for PerEntryTtl {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &StoredValue,
        _created_at: Instant,
    ) -> Option<Duration> {
        value.ttl
    }

    fn expire_after_update(
        &self,
        _key: &String,
        value: &StoredValue,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        value.ttl
    }
}

/// Byte-bounded in-memory store
///
/// Clones share the same entries.
#[derive(Clone)]
pub struct MokaCacheProvider {
    cache: Cache<String, StoredValue>,
    max_size: usize,
}

impl Default for MokaCacheProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MokaCacheProvider {
    /// Store with the default 100 MiB budget
    pub fn new() -> Self {
        Self::with_capacity(CACHE_DEFAULT_SIZE_LIMIT)
    }

    /// Store holding at most `max_size` bytes of keys and values
    pub fn with_capacity(max_size: usize) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_size as u64)
            .weigher(|key: &String, value: &StoredValue| {
                u32::try_from(key.len() + value.json.len()).unwrap_or(u32::MAX)
            })
            .expire_after(PerEntryTtl)
            .build();

        Self { cache, max_size }
    }

    /// Byte budget
    pub fn max_size(&self) -> usize {
        self.max_size
    }
}

#[async_trait]
impl CacheProvider for MokaCacheProvider {
    async fn get_json(&self, key: &str) -> Result<Option<String>> {
        Ok(self.cache.get(key).await.map(|value| value.json.to_string()))
    }

    async fn set_json(&self, key: &str, value: &str, config: CacheEntryConfig) -> Result<()> {
        let size = value.len();
        if size > self.max_size {
            return Err(Error::cache(format!(
                "Value of {size} bytes does not fit the {} byte store",
                self.max_size
            )));
        }

        // A zero TTL stores without expiry, matching Redis SET semantics
        let ttl = Some(config.effective_ttl()).filter(|ttl| !ttl.is_zero());
        let stored = StoredValue {
            json: Arc::from(value),
            ttl,
            expires_at: ttl.map(|ttl| Instant::now() + ttl),
        };
        self.cache.insert(key.to_string(), stored).await;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        Ok(self.cache.remove(key).await.is_some())
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.cache.get(key).await.is_some())
    }

    async fn ttl(&self, key: &str) -> Result<Option<Duration>> {
        let remaining = self
            .cache
            .get(key)
            .await
            .and_then(|value| value.expires_at)
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .filter(|left| !left.is_zero());
        Ok(remaining)
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "moka"
    }
}

impl std::fmt::Debug for MokaCacheProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MokaCacheProvider")
            .field("budget_bytes", &self.max_size)
            .field("len", &self.cache.entry_count())
            .finish()
    }
}

fn build(config: &CacheProviderConfig) -> std::result::Result<Arc<dyn CacheProvider>, String> {
    let budget = config.max_size.unwrap_or(CACHE_DEFAULT_SIZE_LIMIT);
    Ok(Arc::new(MokaCacheProvider::with_capacity(budget)))
}

pub(crate) const MOKA_PROVIDER: CacheProviderEntry = CacheProviderEntry {
    name: "moka",
    description: "In-process store with per-entry expiry",
    factory: build,
};
