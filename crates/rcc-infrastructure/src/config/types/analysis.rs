//! Text analysis configuration types

use rcc_domain::constants::ANALYSIS_DEFAULT_LATENCY_MS;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Text analysis configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Artificial delay before each report, in milliseconds (0 disables it)
    pub latency_ms: u64,
}

impl AnalysisConfig {
    /// Latency as a duration
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            latency_ms: ANALYSIS_DEFAULT_LATENCY_MS,
        }
    }
}
