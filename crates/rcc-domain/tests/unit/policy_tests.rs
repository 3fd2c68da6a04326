//! Unit tests for the caching policy switch

use rcc_domain::CachePolicy;

#[test]
fn test_policy_from_bool() {
    assert_eq!(CachePolicy::from(true), CachePolicy::UseCache);
    assert_eq!(CachePolicy::from(false), CachePolicy::Bypass);
}

#[test]
fn test_uses_cache() {
    assert!(CachePolicy::UseCache.uses_cache());
    assert!(!CachePolicy::Bypass.uses_cache());
}
