//! Heuristic metric extraction from report text
//!
//! Applies a fixed, ordered table of labeled pattern rules to free-form
//! sustainability report prose. Every rule runs independently against the
//! whole text and contributes at most one value; a rule that does not match,
//! or whose number does not parse, simply leaves its key out. A separate pass
//! picks up the report year.
//!
//! The matching is intentionally approximate: the lookahead window after a
//! label can cross sentence boundaries, and units are detected but never
//! converted.
//!
//! # Example Usage
//!
//! ```rust
//! use esg_data_checker::{extract, MetricKey};
//!
//! let metrics = extract("Scope 1 emissions were 1,200 tCO2e in 2023.");
//!
//! assert_eq!(metrics.get(MetricKey::Scope1Tco2e), Some(1200.0));
//! assert_eq!(metrics.get(MetricKey::Year), Some(2023.0));
//! assert!(!metrics.contains(MetricKey::TotalTco2e));
//! ```

pub mod rules;

#[cfg(test)]
pub mod tests;

pub use rules::{ExtractionRule, RuleMatch, extraction_rules, year_rule};

use crate::app::models::ExtractedMetrics;
use tracing::{debug, info};

/// Extract metrics from report text
///
/// # Arguments
///
/// * `text` - Free-form report text
///
/// # Returns
///
/// Metrics keyed by [`crate::MetricKey`], containing only keys whose rule
/// matched with a finite value
pub fn extract(text: &str) -> ExtractedMetrics {
    let cleaned = text.replace('\r', "");
    let mut metrics = ExtractedMetrics::new();

    for rule in extraction_rules().iter().chain(std::iter::once(year_rule())) {
        match rule.apply(&cleaned) {
            Some(found) => {
                debug!(
                    "Extracted {} = {} from {:?}{}",
                    found.key,
                    found.value,
                    found.raw,
                    found
                        .unit
                        .as_deref()
                        .map(|unit| format!(" (unit {})", unit))
                        .unwrap_or_default()
                );
                metrics.insert(found.key, found.value);
            }
            None => debug!("No match for {}", rule.key),
        }
    }

    info!("Extracted {} metrics from {} characters of text", metrics.len(), cleaned.len());

    metrics
}
