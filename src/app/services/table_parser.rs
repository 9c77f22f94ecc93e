//! Comma-delimited table parsing
//!
//! Splits raw disclosure text into a header list and rows keyed by header.
//! Splitting is deliberately naive: there is no quoting or escaping, so a
//! field containing a comma or newline cannot be represented. Malformed rows
//! never fail here; bad values are reported later by the row validator.

use crate::app::models::{Row, Table};
use tracing::debug;

/// Parse comma-delimited text into a [`Table`]
///
/// Carriage returns are removed and outer whitespace trimmed before
/// splitting. Runs of newlines count as a single separator and whitespace-only
/// lines are skipped. Short rows are padded with empty strings; fields beyond
/// the header count are dropped.
///
/// # Arguments
///
/// * `text` - Raw CSV text with a header line first
///
/// # Returns
///
/// The parsed table, empty when the input is blank
pub fn parse(text: &str) -> Table {
    let cleaned = text.replace('\r', "");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return Table::default();
    }

    let mut lines = cleaned.split('\n').filter(|line| !line.is_empty());

    let headers: Vec<String> = match lines.next() {
        Some(header_line) => split_fields(header_line).map(str::to_string).collect(),
        None => return Table::default(),
    };

    let mut rows = Vec::new();
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        rows.push(parse_row(&headers, line));
    }

    debug!(
        "Parsed table with {} columns and {} rows",
        headers.len(),
        rows.len()
    );

    Table { headers, rows }
}

/// Zip one data line positionally against the headers
fn parse_row(headers: &[String], line: &str) -> Row {
    let values: Vec<&str> = split_fields(line).collect();
    if values.len() > headers.len() {
        debug!(
            "Dropping {} extra field(s) beyond header count",
            values.len() - headers.len()
        );
    }

    headers
        .iter()
        .enumerate()
        .map(|(idx, header)| (header.clone(), values.get(idx).copied().unwrap_or("")))
        .collect()
}

fn split_fields(line: &str) -> impl Iterator<Item = &str> {
    line.split(',').map(str::trim)
}
