//! Explicit check session state
//!
//! Holds the currently loaded table between user actions. A session is
//! passed to whoever drives the load/check/clear cycle instead of living in
//! shared global state, and each load replaces the previous table wholesale.

use crate::app::models::{CheckReport, Table};
use crate::app::services::row_validator::RowValidator;
use crate::app::services::scorer::{Scorer, score_label};
use crate::app::services::table_parser;
use crate::config::Config;
use crate::{Error, Result};
use tracing::{debug, info};

/// Load/check/clear state for one table at a time
#[derive(Debug, Clone, Default)]
pub struct CheckSession {
    validator: RowValidator,
    scorer: Scorer,
    table: Option<Table>,
}

impl CheckSession {
    /// Create a session with default rules and scoring
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session using the validation and scoring configuration
    pub fn with_config(config: &Config) -> Self {
        Self {
            validator: RowValidator::new(&config.validation),
            scorer: Scorer::new(config.scoring.clone()),
            table: None,
        }
    }

    /// Parse text and make it the loaded table, replacing any previous one
    pub fn load(&mut self, text: &str) -> &Table {
        let table = table_parser::parse(text);
        info!(
            "Loaded table: {} columns, {} rows",
            table.headers.len(),
            table.row_count()
        );
        self.table.insert(table)
    }

    /// Currently loaded table, if any
    pub fn table(&self) -> Option<&Table> {
        self.table.as_ref()
    }

    /// Whether a table with at least one row is loaded
    pub fn is_ready(&self) -> bool {
        self.table.as_ref().is_some_and(|table| !table.rows.is_empty())
    }

    /// Validate and score the loaded table
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoTableLoaded`] when nothing is loaded or the loaded
    /// table has no data rows.
    pub fn run_checks(&self) -> Result<CheckReport> {
        let table = match &self.table {
            Some(table) if !table.rows.is_empty() => table,
            _ => return Err(Error::NoTableLoaded),
        };

        let issues = self.validator.validate_table(table);
        let score = self.scorer.score(&issues);
        let label = score_label(score, issues.len()).to_string();

        Ok(CheckReport {
            issues,
            score,
            label,
            rows_checked: table.row_count(),
        })
    }

    /// Discard the loaded table
    pub fn clear(&mut self) {
        if self.table.take().is_some() {
            debug!("Cleared loaded table");
        }
    }
}
