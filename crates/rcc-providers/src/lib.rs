//! # Recruitment Crew Cache - Providers
//!
//! Implementations of the domain provider ports.
//!
//! ## Cache Stores
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | [`NullCacheProvider`](cache::NullCacheProvider) | Disabled | Stores nothing, every lookup misses |
//! | [`MokaCacheProvider`](cache::MokaCacheProvider) | Local | In-memory store with per-entry TTL |
//! | [`RedisCacheProvider`](cache::RedisCacheProvider) | Distributed | Redis-backed, reconnects after errors |
//! | [`TieredCacheProvider`](cache::TieredCacheProvider) | Layered | In-memory store in front of a remote store |
//!
//! ## Text Analysis
//!
//! | Provider | Description |
//! |----------|-------------|
//! | [`TemplateAnalysisProvider`](analysis::TemplateAnalysisProvider) | Deterministic templated candidate report with simulated latency |

pub mod analysis;
pub mod cache;
pub mod constants;

pub use analysis::TemplateAnalysisProvider;
pub use cache::{
    CACHE_PROVIDERS, MokaCacheProvider, NullCacheProvider, RedisCacheProvider,
    TieredCacheProvider,
};
