//! `[logging]` section

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_LOG_LEVEL;

/// Subscriber settings read by [`crate::logging::init_logging`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `trace`, `debug`, `info`, `warn` or `error`
    pub level: String,

    /// Emit JSON lines instead of plain text
    pub json_format: bool,

    /// Also write to this file, rotated daily
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_owned(),
            json_format: false,
            file_output: None,
        }
    }
}
