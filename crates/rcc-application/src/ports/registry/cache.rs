//! Cache Provider Registry
//!
//! Each store implementation publishes a [`CacheProviderEntry`]. The
//! provider crate collects its entries into one static slice, and startup
//! code looks the configured name up in that slice.

use std::sync::Arc;

use crate::ports::providers::cache::CacheProvider;

/// Settings handed to a store factory
///
/// Factories read the fields they understand and ignore the others.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheProviderConfig {
    /// Registered name to look up
    pub provider: String,
    /// Connection URL for remote stores
    pub uri: Option<String>,
    /// Byte budget for in-memory stores
    pub max_size: Option<usize>,
}

impl CacheProviderConfig {
    /// Request the store registered as `provider`
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            uri: None,
            max_size: None,
        }
    }

    /// Attach a connection URL
    #[must_use]
    pub fn with_uri(self, uri: impl Into<String>) -> Self {
        Self {
            uri: Some(uri.into()),
            ..self
        }
    }

    /// Attach an in-memory byte budget
    #[must_use]
    pub fn with_max_size(self, max_size: usize) -> Self {
        Self {
            max_size: Some(max_size),
            ..self
        }
    }
}

/// Builds a store from settings, or explains why it cannot
pub type CacheProviderFactory = fn(&CacheProviderConfig) -> Result<Arc<dyn CacheProvider>, String>;

/// A named store implementation
pub struct CacheProviderEntry {
    /// Name matched against `CacheProviderConfig::provider`
    pub name: &'static str,
    /// One-line summary for listings
    pub description: &'static str,
    /// Constructor
    pub factory: CacheProviderFactory,
}

impl std::fmt::Debug for CacheProviderEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheProviderEntry")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Build the store whose entry matches `config.provider`
///
/// Unknown names fail with a message listing every registered name.
pub fn resolve_cache_provider(
    entries: &[CacheProviderEntry],
    config: &CacheProviderConfig,
) -> Result<Arc<dyn CacheProvider>, String> {
    match entries.iter().find(|entry| entry.name == config.provider) {
        Some(entry) => (entry.factory)(config),
        None => {
            let available: Vec<&str> = entries.iter().map(|entry| entry.name).collect();
            Err(format!(
                "Unknown cache provider '{}'. Available providers: {available:?}",
                config.provider
            ))
        }
    }
}

/// `(name, description)` for every entry, in registration order
pub fn list_cache_providers(entries: &[CacheProviderEntry]) -> Vec<(&'static str, &'static str)> {
    entries
        .iter()
        .map(|entry| (entry.name, entry.description))
        .collect()
}
