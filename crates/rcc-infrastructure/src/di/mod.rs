//! Composition root
//!
//! Builds the store, the analysis provider and the use case from
//! configuration and hands them out as trait objects.

pub mod bootstrap;

pub use bootstrap::{AppContext, init_app};
