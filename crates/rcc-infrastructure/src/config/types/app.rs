//! Main application configuration

use super::{AnalysisConfig, CacheConfig, LoggingConfig, ServerConfig};
use serde::{Deserialize, Serialize};

/// Root configuration, one field per TOML section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server settings
    pub server: ServerConfig,
    /// Result store settings
    pub cache: CacheConfig,
    /// Text analysis settings
    pub analysis: AnalysisConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}
