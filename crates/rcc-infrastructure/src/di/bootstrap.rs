//! Application Bootstrap
//!
//! ```text
//! AppConfig → create_cache_provider → Arc<dyn CacheProvider> ─┐
//!           → TemplateAnalysisProvider ───────────────────────┼→ TextProcessingService
//!                                                             └→ StoreHealthChecker
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let context = init_app(ConfigLoader::new().load()?)?;
//! let processed = context
//!     .text_processing()
//!     .process("profile text", CachePolicy::UseCache)
//!     .await?;
//! ```

use crate::cache::create_cache_provider;
use crate::config::AppConfig;
use crate::health::{HealthChecker, StoreHealthChecker};
use rcc_application::ports::providers::TextAnalysisProvider;
use rcc_application::ports::providers::cache::CacheProvider;
use rcc_application::use_cases::TextProcessingService;
use rcc_domain::error::Result;
use rcc_domain::ports::services::TextProcessingServiceInterface;
use rcc_providers::TemplateAnalysisProvider;
use std::sync::Arc;
use tracing::info;

/// Application context shared by every request
#[derive(Clone)]
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,

    cache: Arc<dyn CacheProvider>,
    analyzer: Arc<dyn TextAnalysisProvider>,
    text_processing: Arc<dyn TextProcessingServiceInterface>,
    store_health: Arc<dyn HealthChecker>,
}

impl AppContext {
    /// Wire the use case around explicit providers
    pub fn with_providers(
        config: AppConfig,
        cache: Arc<dyn CacheProvider>,
        analyzer: Arc<dyn TextAnalysisProvider>,
    ) -> Self {
        let service = TextProcessingService::new(Arc::clone(&cache), Arc::clone(&analyzer))
            .with_namespace(config.cache.namespace.as_str())
            .with_ttl(config.cache.ttl());

        Self {
            config: Arc::new(config),
            store_health: Arc::new(StoreHealthChecker::new(Arc::clone(&cache))),
            text_processing: Arc::new(service),
            cache,
            analyzer,
        }
    }

    /// Result store
    pub fn cache(&self) -> Arc<dyn CacheProvider> {
        Arc::clone(&self.cache)
    }

    /// Text analysis provider
    pub fn analyzer(&self) -> Arc<dyn TextAnalysisProvider> {
        Arc::clone(&self.analyzer)
    }

    /// Cache-or-compute service
    pub fn text_processing(&self) -> Arc<dyn TextProcessingServiceInterface> {
        Arc::clone(&self.text_processing)
    }

    /// Store connectivity check
    pub fn store_health(&self) -> Arc<dyn HealthChecker> {
        Arc::clone(&self.store_health)
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("cache", &self.cache.provider_name())
            .field("analyzer", &self.analyzer.provider_name())
            .finish_non_exhaustive()
    }
}

/// Build the application context from configuration
///
/// Does not touch the network; the store connects on first use.
pub fn init_app(config: AppConfig) -> Result<AppContext> {
    info!("Initializing application context");

    let cache = create_cache_provider(&config.cache)?;
    let analyzer: Arc<dyn TextAnalysisProvider> =
        Arc::new(TemplateAnalysisProvider::new(config.analysis.latency()));

    info!(
        cache = cache.provider_name(),
        analyzer = analyzer.provider_name(),
        ttl_secs = config.cache.default_ttl_secs,
        "Resolved providers"
    );

    Ok(AppContext::with_providers(config, cache, analyzer))
}
