//! Application Ports
//!
//! Re-exports the domain provider ports and defines the provider registry.
//!
//! - `providers::*`: Provider interfaces (cache store, text analysis)
//! - `registry::*`: Name-based cache provider selection

/// Provider ports (re-exported from the domain)
pub mod providers {
    pub use rcc_domain::ports::providers::*;

    /// Cache provider port
    pub mod cache {
        pub use rcc_domain::ports::providers::cache::*;
    }
}

/// Provider registry
pub mod registry;

pub use registry::{
    CacheProviderConfig, CacheProviderEntry, list_cache_providers, resolve_cache_provider,
};
