//! Row validation for ESG disclosure tables
//!
//! This module evaluates a fixed rule set against each row of a parsed table
//! and reports data-quality issues. Validation never fails: malformed values
//! become issues and unparseable numbers degrade to "absent".
//!
//! # Rules
//!
//! Rules run in this order for every row:
//!
//! 1. **Required fields** - `company`, `year` and `total_tco2e` must be present (high)
//! 2. **Numeric sanity** - emissions, energy, water and percentage fields must be
//!    finite and non-negative when present (medium)
//! 3. **Reconciliation** - the total must lie within the configured tolerance of
//!    the scope 1-3 sum (medium)
//! 4. **Percentage range** - `female_pct` must lie within 0-100 (medium)
//!
//! # Example Usage
//!
//! ```rust
//! use esg_data_checker::{parse, validate_table};
//!
//! let table = parse("company,year,total_tco2e\n,2023,100");
//! let issues = validate_table(&table);
//!
//! assert_eq!(issues.len(), 1);
//! assert_eq!(issues[0].message, "Row 1: Missing value in \"company\"");
//! ```

pub mod numeric;
pub mod rules;

#[cfg(test)]
pub mod tests;

use crate::app::models::{Issue, Row, Table};
use crate::config::ValidationConfig;
use tracing::{debug, info};

/// Row validator with its reconciliation tolerance
#[derive(Debug, Clone)]
pub struct RowValidator {
    tolerance: f64,
}

impl Default for RowValidator {
    fn default() -> Self {
        Self::new(&ValidationConfig::default())
    }
}

impl RowValidator {
    /// Create a validator from validation configuration
    pub fn new(config: &ValidationConfig) -> Self {
        Self {
            tolerance: config.reconciliation_tolerance,
        }
    }

    /// Relative tolerance used by the reconciliation rule
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Validate a single row
    ///
    /// # Arguments
    ///
    /// * `row` - Row to validate
    ///
    /// # Returns
    ///
    /// Issues found in rule order, empty when the row is clean
    pub fn validate_row(&self, row: &Row) -> Vec<Issue> {
        let mut issues = Vec::new();

        rules::check_required_fields(row, &mut issues);
        rules::check_numeric_sanity(row, &mut issues);
        rules::check_reconciliation(row, self.tolerance, &mut issues);
        rules::check_percentage_range(row, &mut issues);

        issues
    }

    /// Validate every row of a table
    ///
    /// Each issue message is prefixed with its 1-based row number.
    pub fn validate_table(&self, table: &Table) -> Vec<Issue> {
        let mut all_issues = Vec::new();

        for (idx, row) in table.rows.iter().enumerate() {
            let row_issues = self.validate_row(row);
            if !row_issues.is_empty() {
                debug!("Row {}: {} issue(s)", idx + 1, row_issues.len());
            }
            all_issues.extend(row_issues.iter().map(|issue| issue.for_row(idx + 1)));
        }

        info!(
            "Validation complete: {} rows checked, {} issues found",
            table.row_count(),
            all_issues.len()
        );

        all_issues
    }
}

/// Validate a single row with the default rule configuration
pub fn validate_row(row: &Row) -> Vec<Issue> {
    RowValidator::default().validate_row(row)
}

/// Validate every row of a table with the default rule configuration
pub fn validate_table(table: &Table) -> Vec<Issue> {
    RowValidator::default().validate_table(table)
}
