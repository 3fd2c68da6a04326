//! Cache provider factory

use crate::config::CacheConfig;
use rcc_application::ports::providers::cache::CacheProvider;
use rcc_application::ports::registry::{CacheProviderConfig, resolve_cache_provider};
use rcc_domain::error::{Error, Result};
use rcc_providers::{CACHE_PROVIDERS, NullCacheProvider};
use std::sync::Arc;
use tracing::info;

/// Registry request for the configured provider
pub fn cache_provider_config(config: &CacheConfig) -> CacheProviderConfig {
    let registry_config =
        CacheProviderConfig::new(config.provider.as_str()).with_max_size(config.max_size);
    match config.redis_url.as_deref() {
        Some(url) => registry_config.with_uri(url),
        None => registry_config,
    }
}

/// Build the store selected by configuration
///
/// A disabled cache always yields the null store, whatever provider is named.
/// No connection is attempted here; remote stores connect on first use.
pub fn create_cache_provider(config: &CacheConfig) -> Result<Arc<dyn CacheProvider>> {
    if !config.enabled {
        info!("Caching disabled, using null store");
        return Ok(Arc::new(NullCacheProvider::new()));
    }

    let provider = resolve_cache_provider(CACHE_PROVIDERS, &cache_provider_config(config))
        .map_err(|e| Error::configuration(format!("Cache: {e}")))?;

    info!(provider = provider.provider_name(), "Resolved cache provider");
    Ok(provider)
}
