//! Provider Registry
//!
//! Name-based selection of provider implementations. Provider crates
//! publish static tables of entries; the infrastructure layer resolves a
//! configured name against those tables.

pub mod cache;

pub use cache::{
    CacheProviderConfig, CacheProviderEntry, list_cache_providers, resolve_cache_provider,
};
