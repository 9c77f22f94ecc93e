//! Schema command implementation

use super::shared::RunStats;
use crate::Result;
use crate::constants::{EXPECTED_COLUMNS, REQUIRED_FIELDS};
use colored::Colorize;

/// Expected CSV header line
pub fn schema_line() -> String {
    EXPECTED_COLUMNS.join(", ")
}

/// Print the expected column schema
pub fn run_schema() -> Result<RunStats> {
    println!("{}", "Expected columns:".bright_cyan().bold());
    println!("   {}", schema_line());
    println!();
    println!(
        "{} {}",
        "Required on every row:".bright_black(),
        REQUIRED_FIELDS.join(", ").bright_black()
    );
    Ok(RunStats::default())
}
