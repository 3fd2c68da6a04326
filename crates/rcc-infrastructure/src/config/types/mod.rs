//! Configuration types module

pub mod analysis;
pub mod app;
pub mod cache;
pub mod logging;
pub mod server;

// Re-export main types
pub use analysis::AnalysisConfig;
pub use app::AppConfig;
pub use cache::CacheConfig;
pub use logging::LoggingConfig;
pub use server::ServerConfig;
