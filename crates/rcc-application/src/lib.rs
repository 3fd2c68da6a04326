//! Application layer for the recruitment crew cache
//!
//! Holds the cache-or-compute use case ([`TextProcessingService`]) and the
//! registry types used to pick a store backend by name. Nothing here knows
//! about HTTP, Redis or configuration files; those arrive through the
//! port traits re-exported from `rcc-domain`.

pub mod ports;
pub mod use_cases;

pub use ports::*;
pub use use_cases::*;
