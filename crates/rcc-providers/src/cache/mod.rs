//! Result stores
//!
//! | Name | Backend | Use |
//! |------|---------|-----|
//! | `null` | nothing | caching disabled |
//! | `moka` | process memory | single instance, tests |
//! | `redis` | Redis server | shared across instances |
//! | `tiered` | moka then Redis | shared, with hot keys served locally |

pub mod moka;
pub mod null;
pub mod redis;
pub mod tiered;

pub use moka::MokaCacheProvider;
pub use null::NullCacheProvider;
pub use redis::RedisCacheProvider;
pub use tiered::TieredCacheProvider;

pub use rcc_application::ports::providers::cache::{CacheEntryConfig, CacheProvider};

use rcc_application::ports::registry::CacheProviderEntry;

/// Registered stores, in listing order
pub static CACHE_PROVIDERS: &[CacheProviderEntry] = &[
    null::NULL_PROVIDER,
    moka::MOKA_PROVIDER,
    redis::REDIS_PROVIDER,
    tiered::TIERED_PROVIDER,
];
