//! Cache provider selection
//!
//! Turns the `[cache]` configuration section into a store instance.
//! Store implementations are in the `rcc-providers` crate.

pub mod factory;

pub use factory::{cache_provider_config, create_cache_provider};
