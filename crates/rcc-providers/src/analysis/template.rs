//! Templated candidate profile analysis
//!
//! Produces a fixed-shape report whose lines are chosen by keyword
//! presence and input length, after an optional artificial delay that
//! stands in for a slow upstream model.

use async_trait::async_trait;
use rcc_application::ports::providers::TextAnalysisProvider;
use rcc_domain::constants::{ANALYSIS_DEFAULT_LATENCY_MS, ANALYSIS_STRONG_CANDIDATE_MIN_LENGTH};
use rcc_domain::error::Result;
use rcc_domain::value_objects::TextAnalysis;
use std::fmt::Write as _;
use std::time::Duration;
use tracing::debug;

/// Pick `present` when `text` contains `keyword` (case-sensitive)
fn pick<'a>(text: &str, keyword: &str, present: &'a str, absent: &'a str) -> &'a str {
    if text.contains(keyword) {
        present
    } else {
        absent
    }
}

/// Render the candidate report for `text`
///
/// Keyword matching is case-sensitive. Length counts UTF-16 code units,
/// so a character outside the Basic Multilingual Plane counts twice. The
/// report always ends with a newline.
pub fn render_report(text: &str) -> String {
    let background = pick(text, "engineering", "engineering", "technology");
    let experience = pick(
        text,
        "experience",
        "Extensive experience in the field",
        "Promising skill set",
    );
    let leadership = pick(
        text,
        "leadership",
        "Leadership qualities",
        "Collaborative team player",
    );
    let communication = pick(
        text,
        "communication",
        "Advanced communication skills",
        "Communication skills could be improved",
    );
    let management = pick(
        text,
        "management",
        "Project management expertise",
        "Project management experience",
    );
    let recommendation = if text.encode_utf16().count() > ANALYSIS_STRONG_CANDIDATE_MIN_LENGTH {
        "Strong candidate, proceed to next interview round"
    } else {
        "Potential candidate, consider additional screening"
    };

    let mut report = String::from("Analysis of candidate profile:\n\nKey strengths:\n");
    // Writing into a String cannot fail
    let _ = writeln!(report, "- Strong technical background in {background}");
    let _ = writeln!(report, "- {experience}");
    let _ = writeln!(report, "- {leadership}");
    report.push_str("\nAreas for development:\n");
    let _ = writeln!(report, "- {communication}");
    let _ = writeln!(report, "- {management}");
    let _ = writeln!(report, "\nRecommendation: {recommendation}");
    report
}

/// Deterministic report generator with simulated latency
#[derive(Debug, Clone)]
pub struct TemplateAnalysisProvider {
    latency: Duration,
}

impl TemplateAnalysisProvider {
    /// Create a provider that waits `latency` before every report
    ///
    /// `Duration::ZERO` disables the wait.
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    /// Configured artificial delay
    pub fn latency(&self) -> Duration {
        self.latency
    }
}

impl Default for TemplateAnalysisProvider {
    fn default() -> Self {
        Self::new(Duration::from_millis(ANALYSIS_DEFAULT_LATENCY_MS))
    }
}

#[async_trait]
impl TextAnalysisProvider for TemplateAnalysisProvider {
    async fn analyze(&self, text: &str) -> Result<TextAnalysis> {
        if !self.latency.is_zero() {
            debug!(latency_ms = self.latency.as_millis(), "Simulating analysis latency");
            tokio::time::sleep(self.latency).await;
        }
        Ok(TextAnalysis::new(render_report(text)))
    }

    fn provider_name(&self) -> &str {
        "template"
    }
}
