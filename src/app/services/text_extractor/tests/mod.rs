//! Tests for the text extractor module
//!
//! Rule tests exercise each entry of the rule table on its own; extraction
//! tests cover the combined pass over report text.

pub mod rules_tests;

// Test helper functions and fixtures
use crate::app::models::MetricKey;
use crate::app::services::text_extractor::rules::{ExtractionRule, extraction_rules};

/// Report text with scope 1/2, a female percentage and a year, but no total,
/// energy or water phrase
pub const SCOPES_AND_GENDER_TEXT: &str = "Scope 1 emissions were 1,200 tCO2e this year. \
Scope 2 emissions were 800 tCO2e after the switch to renewable tariffs. \
Women represented 42 percent of our workforce. In 2023 we also expanded reporting.";

/// Look up the rule for a metric key
pub fn rule_for(key: MetricKey) -> &'static ExtractionRule {
    extraction_rules()
        .iter()
        .find(|rule| rule.key == key)
        .expect("every labeled metric has a rule")
}

/// Apply a single rule and return only the value
pub fn apply_value(key: MetricKey, text: &str) -> Option<f64> {
    rule_for(key).apply(text).map(|found| found.value)
}
