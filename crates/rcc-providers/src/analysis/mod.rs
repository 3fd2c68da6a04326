//! Text Analysis Provider Implementations
//!
//! The analysis step is the expensive computation the cache sits in front
//! of. Only the templated report generator ships today.

pub mod template;

pub use template::TemplateAnalysisProvider;

// Re-export the port implemented here
pub use rcc_application::ports::providers::TextAnalysisProvider;
