//! Text analysis value objects

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Stored analysis payload
///
/// This is the exact shape persisted in the cache store, encoded as JSON
/// (`{"result": "..."}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextAnalysis {
    /// The generated report text
    pub result: String,
}

impl TextAnalysis {
    /// Wrap a report
    pub fn new<S: Into<String>>(result: S) -> Self {
        Self {
            result: result.into(),
        }
    }
}

/// Result returned to callers of the text processing service
///
/// Serializes with the field names used on the wire:
/// `{"result": "...", "timeTaken": 12, "cacheHit": true}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedText {
    /// The generated or cached report text
    pub result: String,
    /// Wall-clock duration of the whole call, in milliseconds
    #[serde(rename = "timeTaken")]
    pub time_taken_ms: u64,
    /// True iff the result was served from the store
    pub cache_hit: bool,
}

impl ProcessedText {
    /// Build a result from a payload and the elapsed call duration
    pub fn new(analysis: TextAnalysis, elapsed: Duration, cache_hit: bool) -> Self {
        Self {
            result: analysis.result,
            time_taken_ms: round_millis(elapsed),
            cache_hit,
        }
    }
}

/// Round a duration to the nearest whole millisecond
fn round_millis(elapsed: Duration) -> u64 {
    // f64 keeps sub-millisecond precision before rounding
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let millis = (elapsed.as_secs_f64() * 1000.0).round() as u64;
    millis
}
