//! Unit tests for cache entry configuration

use rcc_domain::ports::providers::CacheEntryConfig;
use std::time::Duration;

#[test]
fn test_default_ttl_is_one_hour() {
    let config = CacheEntryConfig::default();
    assert_eq!(config.effective_ttl(), Duration::from_secs(3600));
}

#[test]
fn test_with_ttl_overrides_default() {
    let config = CacheEntryConfig::new().with_ttl(Duration::from_millis(1500));
    assert_eq!(config.effective_ttl(), Duration::from_millis(1500));

    let config = CacheEntryConfig::new().with_ttl_secs(1);
    assert_eq!(config.effective_ttl(), Duration::from_secs(1));
}

#[test]
fn test_missing_ttl_falls_back_to_default() {
    let config = CacheEntryConfig { ttl: None };
    assert_eq!(config.effective_ttl(), Duration::from_secs(3600));
}
