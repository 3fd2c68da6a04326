//! Text Processing Service Use Case
//!
//! Cache-or-compute orchestration around text analysis.
//!
//! Every call derives a content-addressed key, then either serves the stored
//! analysis or runs the analysis provider and writes the result back with a
//! fixed TTL. The store is advisory: lookup failures and undecodable entries
//! count as misses, write-back failures are logged and dropped.

use crate::ports::providers::TextAnalysisProvider;
use crate::ports::providers::cache::{CacheEntryConfig, CacheProvider};
use rcc_domain::constants::{DEFAULT_CACHE_TTL_SECS, TEXT_PROCESSING_NAMESPACE};
use rcc_domain::error::Result;
use rcc_domain::ports::services::TextProcessingServiceInterface;
use rcc_domain::value_objects::{CacheKey, CachePolicy, ProcessedText, TextAnalysis};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Text processing service implementation
#[derive(Clone)]
pub struct TextProcessingService {
    cache: Arc<dyn CacheProvider>,
    analyzer: Arc<dyn TextAnalysisProvider>,
    namespace: String,
    entry_config: CacheEntryConfig,
}

impl TextProcessingService {
    /// Create a service with the default namespace and TTL
    pub fn new(cache: Arc<dyn CacheProvider>, analyzer: Arc<dyn TextAnalysisProvider>) -> Self {
        Self {
            cache,
            analyzer,
            namespace: TEXT_PROCESSING_NAMESPACE.to_string(),
            entry_config: CacheEntryConfig::new().with_ttl_secs(DEFAULT_CACHE_TTL_SECS),
        }
    }

    /// Override the key namespace
    #[must_use]
    pub fn with_namespace<S: Into<String>>(mut self, namespace: S) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Override the TTL applied on write-back
    #[must_use]
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.entry_config = self.entry_config.with_ttl(ttl);
        self
    }

    /// Key under which the analysis of `text` is stored
    pub fn cache_key(&self, text: &str) -> CacheKey {
        CacheKey::derive(&self.namespace, text)
    }

    /// Look up a stored analysis, treating every failure as a miss
    async fn lookup(&self, key: &CacheKey) -> Option<TextAnalysis> {
        let json = match self.cache.get_json(key.as_str()).await {
            Ok(Some(json)) => json,
            Ok(None) => {
                debug!(key = %key, "Cache miss");
                return None;
            }
            Err(e) => {
                warn!(key = %key, error = %e, "Cache lookup failed, computing fresh result");
                return None;
            }
        };

        match serde_json::from_str::<TextAnalysis>(&json) {
            Ok(analysis) => Some(analysis),
            Err(e) => {
                warn!(key = %key, error = %e, "Discarding undecodable cache entry");
                None
            }
        }
    }

    /// Persist a fresh analysis; failures never reach the caller
    async fn write_back(&self, key: &CacheKey, analysis: &TextAnalysis) {
        let json = match serde_json::to_string(analysis) {
            Ok(json) => json,
            Err(e) => {
                warn!(key = %key, error = %e, "Failed to encode analysis for cache");
                return;
            }
        };

        if let Err(e) = self
            .cache
            .set_json(key.as_str(), &json, self.entry_config)
            .await
        {
            warn!(key = %key, error = %e, "Cache write-back failed");
        }
    }
}

#[async_trait::async_trait]
impl TextProcessingServiceInterface for TextProcessingService {
    async fn process(&self, text: &str, policy: CachePolicy) -> Result<ProcessedText> {
        let started = Instant::now();
        let key = self.cache_key(text);

        if policy.uses_cache()
            && let Some(analysis) = self.lookup(&key).await
        {
            debug!(key = %key, "Serving analysis from cache");
            return Ok(ProcessedText::new(analysis, started.elapsed(), true));
        }

        let analysis = self.analyzer.analyze(text).await?;

        if policy.uses_cache() {
            self.write_back(&key, &analysis).await;
        }

        debug!(
            key = %key,
            provider = self.analyzer.provider_name(),
            "Computed fresh analysis"
        );
        Ok(ProcessedText::new(analysis, started.elapsed(), false))
    }
}

impl std::fmt::Debug for TextProcessingService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextProcessingService")
            .field("cache", &self.cache.provider_name())
            .field("analyzer", &self.analyzer.provider_name())
            .field("namespace", &self.namespace)
            .field("ttl", &self.entry_config.effective_ttl())
            .finish()
    }
}
