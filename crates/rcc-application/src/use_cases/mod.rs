//! Use Case Implementations
//!
//! Application services orchestrating domain ports.

pub mod text_processing_service;

pub use text_processing_service::TextProcessingService;
