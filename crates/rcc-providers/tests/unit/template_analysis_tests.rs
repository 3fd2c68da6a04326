//! Tests for the templated candidate report

use rcc_providers::analysis::template::render_report;
use rcc_providers::analysis::{TemplateAnalysisProvider, TextAnalysisProvider};
use std::time::Duration;

const SHORT_PROFILE: &str = "Experienced engineering leader with strong communication skills";

#[test]
fn test_short_profile_report() {
    let expected = "Analysis of candidate profile:\n\
                    \n\
                    Key strengths:\n\
                    - Strong technical background in engineering\n\
                    - Promising skill set\n\
                    - Collaborative team player\n\
                    \n\
                    Areas for development:\n\
                    - Advanced communication skills\n\
                    - Project management experience\n\
                    \n\
                    Recommendation: Potential candidate, consider additional screening\n";
    assert_eq!(render_report(SHORT_PROFILE), expected);
}

#[test]
fn test_keywords_are_case_sensitive() {
    let report = render_report("Leadership and Management roles");
    assert!(report.contains("- Collaborative team player\n"));
    assert!(report.contains("- Project management experience\n"));

    let report = render_report("shows leadership in management");
    assert!(report.contains("- Leadership qualities\n"));
    assert!(report.contains("- Project management expertise\n"));
}

#[test]
fn test_experience_keyword() {
    let report = render_report("ten years of experience");
    assert!(report.contains("- Extensive experience in the field\n"));
    assert!(report.contains("- Strong technical background in technology\n"));
}

#[test]
fn test_empty_text_gets_defaults() {
    let report = render_report("");
    assert!(report.contains("- Communication skills could be improved\n"));
    assert!(report.ends_with("Recommendation: Potential candidate, consider additional screening\n"));
}

#[test]
fn test_strong_recommendation_needs_more_than_limit() {
    let at_limit = "a".repeat(100);
    assert!(render_report(&at_limit).contains("Potential candidate"));

    let over_limit = "a".repeat(101);
    assert!(render_report(&over_limit).contains("Strong candidate, proceed to next interview round"));
}

#[test]
fn test_length_counts_utf16_units_not_bytes() {
    // 60 two-byte characters: 120 bytes but only 60 code units
    let text = "é".repeat(60);
    assert!(render_report(&text).contains("Potential candidate"));
}

#[test]
fn test_astral_characters_count_twice() {
    // 60 emoji: 60 characters but 120 code units
    let text = "😀".repeat(60);
    assert!(render_report(&text).contains("Strong candidate, proceed to next interview round"));
}

#[tokio::test]
async fn test_provider_wraps_report() {
    let provider = TemplateAnalysisProvider::new(Duration::ZERO);
    let analysis = provider.analyze(SHORT_PROFILE).await.unwrap();
    assert_eq!(analysis.result, render_report(SHORT_PROFILE));
    assert_eq!(provider.provider_name(), "template");
}

#[tokio::test(start_paused = true)]
async fn test_provider_waits_configured_latency() {
    let provider = TemplateAnalysisProvider::default();
    assert_eq!(provider.latency(), Duration::from_millis(2000));

    let started = tokio::time::Instant::now();
    provider.analyze("profile").await.unwrap();
    assert!(started.elapsed() >= Duration::from_millis(2000));
}
