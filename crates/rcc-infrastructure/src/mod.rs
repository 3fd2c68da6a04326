//! # Infrastructure
//!
//! Turns configuration into a running object graph. Store and analysis
//! implementations live in `rcc-providers`; this crate picks them by name
//! and wires them into [`di::AppContext`].
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | TOML and environment layering with figment |
//! | [`cache`] | Store selection from `[cache]` |
//! | [`di`] | Composition root |
//! | [`health`] | Store ping for the health endpoint |
//! | [`logging`] | tracing subscriber setup |
//! | [`error_ext`] | Context helpers for foreign errors |

pub mod cache;
pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod health;
pub mod logging;

pub use error_ext::ErrorContext;
