//! Application configuration
//!
//! Typed configuration sections and the layered [`loader::ConfigLoader`].

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::*;
