//! Cache-or-compute behavior against a working store

use crate::test_utils::{CountingAnalyzer, FailingAnalyzer, service_with_memory_store};
use rcc_application::ports::providers::cache::{CacheEntryConfig, CacheProvider};
use rcc_application::use_cases::TextProcessingService;
use rcc_domain::{CacheKey, CachePolicy};
use rcc_domain::constants::TEXT_PROCESSING_NAMESPACE;
use rcc_domain::error::Error;
use rcc_domain::ports::services::TextProcessingServiceInterface;
use rcc_providers::MokaCacheProvider;
use std::sync::Arc;
use std::time::Duration;

const PROFILE: &str = "Experienced engineering leader with strong communication skills";

#[tokio::test]
async fn test_miss_then_hit_returns_same_result() {
    let (service, _store, analyzer) = service_with_memory_store();

    let first = service.process(PROFILE, CachePolicy::UseCache).await.unwrap();
    let second = service.process(PROFILE, CachePolicy::UseCache).await.unwrap();

    assert!(!first.cache_hit);
    assert!(second.cache_hit);
    assert_eq!(first.result, second.result);
    assert_eq!(analyzer.calls(), 1);
}

#[tokio::test]
async fn test_result_is_persisted_under_content_key() {
    let (service, store, _analyzer) = service_with_memory_store();

    let processed = service.process(PROFILE, CachePolicy::UseCache).await.unwrap();

    let key = CacheKey::derive(TEXT_PROCESSING_NAMESPACE, PROFILE);
    assert_eq!(service.cache_key(PROFILE), key);
    let stored = store.get_json(key.as_str()).await.unwrap().unwrap();
    let payload: serde_json::Value = serde_json::from_str(&stored).unwrap();
    assert_eq!(payload, serde_json::json!({ "result": processed.result }));
}

#[tokio::test]
async fn test_bypass_never_reads_or_writes() {
    let (service, store, analyzer) = service_with_memory_store();

    let first = service.process(PROFILE, CachePolicy::Bypass).await.unwrap();
    let second = service.process(PROFILE, CachePolicy::Bypass).await.unwrap();

    assert!(!first.cache_hit);
    assert!(!second.cache_hit);
    assert_eq!(analyzer.calls(), 2);
    assert!(!store.exists(service.cache_key(PROFILE).as_str()).await.unwrap());
}

#[tokio::test]
async fn test_bypass_ignores_existing_entry() {
    let (service, _store, analyzer) = service_with_memory_store();

    service.process(PROFILE, CachePolicy::UseCache).await.unwrap();
    let bypassed = service.process(PROFILE, CachePolicy::Bypass).await.unwrap();

    assert!(!bypassed.cache_hit);
    assert_eq!(analyzer.calls(), 2);
}

#[tokio::test]
async fn test_distinct_texts_do_not_share_entries() {
    let (service, _store, analyzer) = service_with_memory_store();

    service.process("profile one", CachePolicy::UseCache).await.unwrap();
    let other = service.process("profile one ", CachePolicy::UseCache).await.unwrap();

    assert!(!other.cache_hit);
    assert_eq!(analyzer.calls(), 2);
}

#[tokio::test]
async fn test_corrupted_entry_is_treated_as_miss() {
    let (service, store, analyzer) = service_with_memory_store();
    let key = service.cache_key(PROFILE);
    store
        .set_json(key.as_str(), "not json", CacheEntryConfig::default())
        .await
        .unwrap();

    let processed = service.process(PROFILE, CachePolicy::UseCache).await.unwrap();

    assert!(!processed.cache_hit);
    assert_eq!(analyzer.calls(), 1);
    // The fresh result replaces the corrupted entry
    let repaired = service.process(PROFILE, CachePolicy::UseCache).await.unwrap();
    assert!(repaired.cache_hit);
}

#[tokio::test]
async fn test_entry_written_with_configured_ttl() {
    let store = Arc::new(MokaCacheProvider::new());
    let analyzer = Arc::new(CountingAnalyzer::new());
    let service = TextProcessingService::new(store.clone(), analyzer.clone())
        .with_ttl(Duration::from_secs(1));

    service.process(PROFILE, CachePolicy::UseCache).await.unwrap();
    tokio::time::sleep(Duration::from_secs(2)).await;
    let after_expiry = service.process(PROFILE, CachePolicy::UseCache).await.unwrap();

    assert!(!after_expiry.cache_hit);
    assert_eq!(analyzer.calls(), 2);
}

#[tokio::test]
async fn test_custom_namespace_changes_key() {
    let store = Arc::new(MokaCacheProvider::new());
    let analyzer = Arc::new(CountingAnalyzer::new());
    let service = TextProcessingService::new(store, analyzer).with_namespace("screening");

    assert!(service.cache_key(PROFILE).as_str().starts_with("screening:"));
}

#[tokio::test]
async fn test_analysis_error_propagates() {
    let store = Arc::new(MokaCacheProvider::new());
    let service = TextProcessingService::new(store.clone(), Arc::new(FailingAnalyzer));

    let err = service.process(PROFILE, CachePolicy::UseCache).await.unwrap_err();

    assert!(matches!(err, Error::Analysis { .. }));
    assert!(!store.exists(service.cache_key(PROFILE).as_str()).await.unwrap());
}
