//! Individual row validation rules
//!
//! Each rule appends zero or more issues for a single row. Rules are
//! independent; their order only affects how issues are listed.

use super::numeric::{coerce_number, format_number, parse_field_number};
use crate::app::models::{Issue, Row};
use crate::constants::{
    NUMERIC_FIELDS, PERCENTAGE_MAX, PERCENTAGE_MIN, REQUIRED_FIELDS, SCOPE_FIELDS, columns,
};
use tracing::debug;

/// Flag required fields that are missing or empty (high severity)
pub fn check_required_fields(row: &Row, issues: &mut Vec<Issue>) {
    for field in REQUIRED_FIELDS {
        if row.is_blank(field) {
            issues.push(Issue::high(format!("Missing value in \"{}\"", field)));
        }
    }
}

/// Flag numeric fields that are non-finite or negative (medium severity)
///
/// Blank fields are skipped; thousands separators are removed before parsing.
pub fn check_numeric_sanity(row: &Row, issues: &mut Vec<Issue>) {
    for field in NUMERIC_FIELDS {
        let raw = row.value(field);
        if raw.is_empty() {
            continue;
        }

        let value = parse_field_number(raw);
        if !value.is_finite() || value < 0.0 {
            issues.push(Issue::medium(format!(
                "Unexpected value in \"{}\" ({})",
                field, raw
            )));
        }
    }
}

/// Flag totals that differ from the scope 1-3 sum by more than `tolerance`
///
/// Missing scope and total values count as zero. The check only runs when the
/// total is nonzero and at least one scope value is nonzero. Values are read
/// without removing thousands separators, so "1,200" does not parse; when any
/// of the four values fails to parse the check is skipped.
pub fn check_reconciliation(row: &Row, tolerance: f64, issues: &mut Vec<Issue>) {
    let scopes: Vec<f64> = SCOPE_FIELDS
        .iter()
        .map(|field| coerce_number(row.value(field)))
        .collect();
    let total = coerce_number(row.value(columns::TOTAL));

    if !total.is_finite() || scopes.iter().any(|value| !value.is_finite()) {
        debug!("Skipping reconciliation: unparseable scope or total value");
        return;
    }

    if total == 0.0 || scopes.iter().all(|value| *value == 0.0) {
        return;
    }

    let sum: f64 = scopes.iter().sum();
    let diff = (sum - total).abs();
    if diff > total * tolerance {
        issues.push(Issue::medium(format!(
            "Total emissions ({}) do not align with Scopes 1–3 sum ({}).",
            format_number(total),
            format_number(sum)
        )));
    }
}

/// Flag a female percentage outside the 0-100 range (medium severity)
///
/// Values that do not parse as plain numbers, including ones with thousands
/// separators, are skipped.
pub fn check_percentage_range(row: &Row, issues: &mut Vec<Issue>) {
    let raw = row.value(columns::FEMALE_PCT);
    if raw.is_empty() {
        return;
    }

    let value = coerce_number(raw);
    if value.is_finite() && !(PERCENTAGE_MIN..=PERCENTAGE_MAX).contains(&value) {
        issues.push(Issue::medium(format!(
            "Female percentage outside 0–100 range ({}).",
            raw
        )));
    }
}
