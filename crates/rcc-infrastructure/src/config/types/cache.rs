//! Cache configuration types

use crate::constants::DEFAULT_CACHE_PROVIDER;
use rcc_domain::constants::{DEFAULT_CACHE_TTL_SECS, TEXT_PROCESSING_NAMESPACE};
use rcc_providers::constants::{CACHE_DEFAULT_SIZE_LIMIT, REDIS_DEFAULT_URL};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Cache configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Cache enabled; when false every lookup misses and nothing is stored
    pub enabled: bool,

    /// Registered provider name (`redis`, `tiered`, `moka`, `null`)
    pub provider: String,

    /// Redis URL (for the `redis` and `tiered` providers)
    pub redis_url: Option<String>,

    /// Time-to-live applied to every stored result, in seconds
    pub default_ttl_secs: u64,

    /// Maximum in-memory cache size in bytes
    pub max_size: usize,

    /// Namespace prefix for cache keys
    pub namespace: String,
}

impl CacheConfig {
    /// TTL as a duration
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.default_ttl_secs)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            provider: DEFAULT_CACHE_PROVIDER.to_string(),
            redis_url: Some(REDIS_DEFAULT_URL.to_string()),
            default_ttl_secs: DEFAULT_CACHE_TTL_SECS,
            max_size: CACHE_DEFAULT_SIZE_LIMIT,
            namespace: TEXT_PROCESSING_NAMESPACE.to_string(),
        }
    }
}
