//! # Recruitment Crew Cache - Domain Layer
//!
//! Core types and contracts for content-addressed result caching.
//!
//! The domain layer owns:
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`error`] | The crate-wide [`Error`](error::Error) type and [`Result`](error::Result) alias |
//! | [`constants`] | Namespace, TTL and analysis defaults |
//! | [`value_objects`] | [`CacheKey`], [`CachePolicy`], [`TextAnalysis`], [`ProcessedText`] |
//! | [`ports`] | Provider ports (cache store, text analysis) and service interfaces |
//!
//! Nothing here performs I/O. Providers and infrastructure implement the ports.

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use value_objects::{CacheKey, CachePolicy, ProcessedText, TextAnalysis};
