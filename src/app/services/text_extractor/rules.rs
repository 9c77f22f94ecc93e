//! Declarative extraction rule table
//!
//! Each rule pairs a metric key with a case-insensitive pattern of the form
//! `<label><up to 40 non-digits><number>[unit]`, the capture group holding the
//! number, an optional unit group, and a normalization function. Rules are
//! evaluated uniformly by [`ExtractionRule::apply`].

use crate::app::models::MetricKey;
use crate::constants::EXTRACTION_LOOKAHEAD_CHARS;
use regex::Regex;
use std::sync::LazyLock;

/// Number capture: a digit followed by digits, separators, points or spaces
const NUMBER_PATTERN: &str = r"([0-9][0-9,. ]*)";

/// One labeled metric matcher
#[derive(Debug)]
pub struct ExtractionRule {
    /// Output key populated on a successful match
    pub key: MetricKey,
    /// Compiled case-insensitive pattern
    pub pattern: Regex,
    /// Capture group holding the numeric candidate
    pub value_group: usize,
    /// Capture group holding an optional unit, detected but never converted
    pub unit_group: Option<usize>,
    /// Turns the raw capture into a number, `None` when not finite
    pub normalize: fn(&str) -> Option<f64>,
}

/// A successful rule match
#[derive(Debug, Clone, PartialEq)]
pub struct RuleMatch {
    pub key: MetricKey,
    /// Raw numeric capture before normalization
    pub raw: String,
    pub value: f64,
    pub unit: Option<String>,
}

impl ExtractionRule {
    fn new(
        key: MetricKey,
        pattern: &str,
        value_group: usize,
        unit_group: Option<usize>,
    ) -> Self {
        Self {
            key,
            pattern: Regex::new(pattern).expect("extraction patterns are valid"),
            value_group,
            unit_group,
            normalize: normalize_number,
        }
    }

    /// Apply the rule to text, using the first (leftmost) match only
    ///
    /// Returns `None` when the pattern does not match or the captured number
    /// does not normalize to a finite value.
    pub fn apply(&self, text: &str) -> Option<RuleMatch> {
        let captures = self.pattern.captures(text)?;
        let raw = captures.get(self.value_group)?.as_str();
        let value = (self.normalize)(raw)?;
        let unit = self
            .unit_group
            .and_then(|group| captures.get(group))
            .map(|m| m.as_str().to_string());

        Some(RuleMatch {
            key: self.key,
            raw: raw.to_string(),
            value,
            unit,
        })
    }
}

/// Remove whitespace and thousands separators, then parse
///
/// Returns `None` unless the result is a finite number.
pub fn normalize_number(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Build `(?i)(<label>)[^0-9]{0,N}(<number>)<suffix>`
fn labeled_number(label: &str, suffix: &str) -> String {
    format!(
        r"(?i)({})[^0-9]{{0,{}}}{}{}",
        label, EXTRACTION_LOOKAHEAD_CHARS, NUMBER_PATTERN, suffix
    )
}

static EXTRACTION_RULES: LazyLock<Vec<ExtractionRule>> = LazyLock::new(|| {
    vec![
        ExtractionRule::new(MetricKey::Scope1Tco2e, &labeled_number(r"scope\s*1", ""), 2, None),
        ExtractionRule::new(MetricKey::Scope2Tco2e, &labeled_number(r"scope\s*2", ""), 2, None),
        ExtractionRule::new(MetricKey::Scope3Tco2e, &labeled_number(r"scope\s*3", ""), 2, None),
        ExtractionRule::new(
            MetricKey::TotalTco2e,
            &labeled_number(r"total\s*(?:emissions|ghg|co2e)", ""),
            2,
            None,
        ),
        ExtractionRule::new(
            MetricKey::EnergyMwh,
            &labeled_number("energy", r"\s*(mwh|gwh)?"),
            2,
            Some(3),
        ),
        ExtractionRule::new(
            MetricKey::WaterM3,
            &labeled_number("water", r"\s*(m3|m³)?"),
            2,
            Some(3),
        ),
        ExtractionRule::new(
            MetricKey::FemalePct,
            &labeled_number("women|female", r"\s*(?:%|percent)"),
            2,
            None,
        ),
    ]
});

/// First standalone four-digit run starting with "20"
static YEAR_RULE: LazyLock<ExtractionRule> = LazyLock::new(|| {
    ExtractionRule::new(MetricKey::Year, r"(?:^|[^0-9])(20[0-9]{2})(?:[^0-9]|$)", 1, None)
});

/// Labeled metric rules in evaluation order
pub fn extraction_rules() -> &'static [ExtractionRule] {
    &EXTRACTION_RULES
}

/// The report-year rule, evaluated after the labeled rules
pub fn year_rule() -> &'static ExtractionRule {
    &YEAR_RULE
}
