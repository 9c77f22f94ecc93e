//! Core data models for ESG disclosure checking
//!
//! Defines the parsed table, validation issues, extracted metrics and check
//! reports that flow between the parser, validator, scorer and extractor.

use crate::constants::EXPECTED_COLUMNS;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// A single data row keyed by header name
///
/// Every header of the owning [`Table`] has an entry; values missing from the
/// source line are stored as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    values: HashMap<String, String>,
}

impl Row {
    /// Create an empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field value, replacing any previous value for the same header
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.values.insert(field.into(), value.into());
    }

    /// Get a field value, if the header exists
    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    /// Get a field value, treating a missing header as empty
    pub fn value(&self, field: &str) -> &str {
        self.get(field).unwrap_or("")
    }

    /// Whether the field is missing or holds an empty string
    pub fn is_blank(&self, field: &str) -> bool {
        self.value(field).is_empty()
    }

    /// Number of fields in this row
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the row has no fields
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (field, value) in iter {
            row.insert(field, value);
        }
        row
    }
}

/// Parsed disclosure table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Header names in source order
    pub headers: Vec<String>,
    /// Data rows in source order
    pub rows: Vec<Row>,
}

impl Table {
    /// Whether the table has neither headers nor rows
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }

    /// Number of data rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Expected schema columns that the loaded headers do not contain
    pub fn missing_expected_columns(&self) -> Vec<&'static str> {
        EXPECTED_COLUMNS
            .iter()
            .copied()
            .filter(|column| !self.headers.iter().any(|h| h == column))
            .collect()
    }
}

/// Issue severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single data-quality finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub severity: Severity,
    pub message: String,
}

impl Issue {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }

    pub fn high(message: impl Into<String>) -> Self {
        Self::new(Severity::High, message)
    }

    pub fn medium(message: impl Into<String>) -> Self {
        Self::new(Severity::Medium, message)
    }

    pub fn low(message: impl Into<String>) -> Self {
        Self::new(Severity::Low, message)
    }

    /// Copy of this issue with the 1-based row number prefixed to the message
    pub fn for_row(&self, row_number: usize) -> Self {
        Self::new(self.severity, format!("Row {}: {}", row_number, self.message))
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity, self.message)
    }
}

/// Metric keys produced by the text extractor, in rule order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MetricKey {
    #[serde(rename = "scope1_tco2e")]
    Scope1Tco2e,
    #[serde(rename = "scope2_tco2e")]
    Scope2Tco2e,
    #[serde(rename = "scope3_tco2e")]
    Scope3Tco2e,
    #[serde(rename = "total_tco2e")]
    TotalTco2e,
    #[serde(rename = "energy_mwh")]
    EnergyMwh,
    #[serde(rename = "water_m3")]
    WaterM3,
    #[serde(rename = "female_pct")]
    FemalePct,
    #[serde(rename = "year")]
    Year,
}

impl MetricKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKey::Scope1Tco2e => "scope1_tco2e",
            MetricKey::Scope2Tco2e => "scope2_tco2e",
            MetricKey::Scope3Tco2e => "scope3_tco2e",
            MetricKey::TotalTco2e => "total_tco2e",
            MetricKey::EnergyMwh => "energy_mwh",
            MetricKey::WaterM3 => "water_m3",
            MetricKey::FemalePct => "female_pct",
            MetricKey::Year => "year",
        }
    }
}

impl fmt::Display for MetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metrics recovered from report text
///
/// Iteration follows [`MetricKey`] order, which matches the extraction rule
/// order with the year last.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtractedMetrics {
    values: BTreeMap<MetricKey, f64>,
}

impl ExtractedMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: MetricKey, value: f64) {
        self.values.insert(key, value);
    }

    pub fn get(&self, key: MetricKey) -> Option<f64> {
        self.values.get(&key).copied()
    }

    pub fn contains(&self, key: MetricKey) -> bool {
        self.values.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (MetricKey, f64)> + '_ {
        self.values.iter().map(|(k, v)| (*k, *v))
    }
}

/// Outcome of running the row validator over a loaded table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckReport {
    /// Row-prefixed issues in row order
    pub issues: Vec<Issue>,
    /// Quality score within the configured floor and 100
    pub score: i32,
    /// Human-readable summary of the score
    pub label: String,
    /// Number of rows checked
    pub rows_checked: usize,
}

impl CheckReport {
    /// Count issues of the given severity
    pub fn count(&self, severity: Severity) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == severity)
            .count()
    }

    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_missing_field_reads_as_blank() {
        let row: Row = [("company", "Acme Bank")].into_iter().collect();
        assert_eq!(row.get("year"), None);
        assert_eq!(row.value("year"), "");
        assert!(row.is_blank("year"));
        assert!(!row.is_blank("company"));
    }

    #[test]
    fn test_row_later_insert_wins() {
        let row: Row = [("source", "first"), ("source", "second")]
            .into_iter()
            .collect();
        assert_eq!(row.len(), 1);
        assert_eq!(row.value("source"), "second");
    }

    #[test]
    fn test_missing_expected_columns() {
        let table = Table {
            headers: vec!["company".to_string(), "year".to_string()],
            rows: vec![],
        };
        let missing = table.missing_expected_columns();
        assert!(!missing.contains(&"company"));
        assert!(missing.contains(&"total_tco2e"));
        assert_eq!(missing.len(), EXPECTED_COLUMNS.len() - 2);
    }

    #[test]
    fn test_issue_display_and_row_prefix() {
        let issue = Issue::high("Missing value in \"company\"");
        assert_eq!(issue.to_string(), "[high] Missing value in \"company\"");

        let prefixed = issue.for_row(3);
        assert_eq!(prefixed.severity, Severity::High);
        assert_eq!(prefixed.message, "Row 3: Missing value in \"company\"");
    }

    #[test]
    fn test_severity_serialization() {
        let json = serde_json::to_string(&Severity::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
    }

    #[test]
    fn test_extracted_metrics_serialize_in_rule_order() {
        let mut metrics = ExtractedMetrics::new();
        metrics.insert(MetricKey::Year, 2023.0);
        metrics.insert(MetricKey::Scope1Tco2e, 1200.0);

        let json = serde_json::to_string(&metrics).unwrap();
        assert_eq!(json, r#"{"scope1_tco2e":1200.0,"year":2023.0}"#);
    }
}
