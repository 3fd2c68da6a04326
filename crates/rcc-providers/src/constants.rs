//! Provider constants

/// Default Redis connection URL
pub const REDIS_DEFAULT_URL: &str = "redis://localhost:6379";

/// Default in-memory cache size limit (100MB)
pub const CACHE_DEFAULT_SIZE_LIMIT: usize = 100 * 1024 * 1024;

/// Upper bound on how long the local tier of a tiered cache keeps an entry
pub const TIERED_LOCAL_TTL_SECS: u64 = 300;
