//! Check command implementation
//!
//! Loads each input table into a fresh [`CheckSession`], runs validation and
//! scoring, and renders the results as human-readable text or JSON.

use super::shared::{
    RunStats, apply_check_overrides, create_progress_bar, print_status, score_text, severity_tag,
};
use crate::app::models::{CheckReport, Table};
use crate::app::session::CheckSession;
use crate::cli::args::{CheckArgs, OutputFormat};
use crate::cli::input::{InputSource, resolve_table_inputs};
use crate::config::Config;
use crate::constants::messages;
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use colored::Colorize;
use indicatif::HumanDuration;
use serde::Serialize;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Result of checking one input table
#[derive(Debug, Clone, Serialize)]
pub struct TableCheck {
    /// Where the table came from
    pub source: String,
    /// Header names as loaded
    pub headers: Vec<String>,
    /// Schema columns absent from the headers (informational only)
    pub missing_expected_columns: Vec<&'static str>,
    /// Validation outcome, absent when the table had no rows
    pub report: Option<CheckReport>,
}

/// Run totals included in JSON output
#[derive(Debug, Serialize)]
struct CheckSummary {
    tables_checked: usize,
    rows_checked: usize,
    issues_found: usize,
    lowest_score: Option<i32>,
    processing_time_seconds: f64,
}

impl From<&RunStats> for CheckSummary {
    fn from(stats: &RunStats) -> Self {
        Self {
            tables_checked: stats.inputs_processed,
            rows_checked: stats.rows_checked,
            issues_found: stats.issues_found,
            lowest_score: stats.lowest_score,
            processing_time_seconds: stats.processing_time.as_secs_f64(),
        }
    }
}

/// JSON document emitted by `check --format json`
#[derive(Debug, Serialize)]
struct CheckOutput<'a> {
    generated_at: DateTime<Utc>,
    summary: CheckSummary,
    tables: &'a [TableCheck],
}

/// Check command runner
pub async fn run_check(args: CheckArgs, mut config: Config, show_progress: bool) -> Result<RunStats> {
    let start_time = Instant::now();
    let mut stats = RunStats::default();

    debug!("Check arguments: {:?}", args);
    args.validate()?;
    apply_check_overrides(&mut config, &args)?;

    if args.has_no_input() {
        // Nothing loaded: report the precondition the same way the session does
        let session = CheckSession::with_config(&config);
        match session.run_checks() {
            Err(error) if error.is_precondition() => print_status(&error.to_string()),
            Err(error) => return Err(error),
            Ok(_) => {}
        }
        return Ok(stats);
    }

    let mut sources = Vec::new();
    if args.sample {
        sources.push(InputSource::SampleTable);
    }
    sources.extend(resolve_table_inputs(&args.inputs)?);

    if sources.is_empty() {
        warn!("No CSV files found in the given inputs");
        print_status(&Error::NoTableLoaded.to_string());
        return Ok(stats);
    }

    info!("Checking {} table(s)", sources.len());

    let progress_bar = (show_progress
        && args.output_format == OutputFormat::Human
        && sources.len() > 1)
        .then(|| create_progress_bar(sources.len() as u64, "Checking tables"));

    let mut session = CheckSession::with_config(&config);
    let mut checks = Vec::with_capacity(sources.len());

    for source in &sources {
        let text = source.read().await?;
        let check = check_source(&mut session, source, &text)?;
        if let Some(report) = &check.report {
            stats.record_check(report.rows_checked, report.issues.len(), report.score);
        }
        checks.push(check);

        if let Some(pb) = &progress_bar {
            pb.inc(1);
        }
    }

    if let Some(pb) = &progress_bar {
        pb.finish_and_clear();
    }

    stats.processing_time = start_time.elapsed();

    match args.output_format {
        OutputFormat::Human => {
            render_human(&checks);
            render_summary(&stats);
        }
        OutputFormat::Json => render_json(&checks, &stats)?,
    }

    info!(
        "Check completed in {:.2}s: {} tables, {} rows, {} issues",
        stats.processing_time.as_secs_f64(),
        stats.inputs_processed,
        stats.rows_checked,
        stats.issues_found
    );

    Ok(stats)
}

/// Load one source into the session, check it, and clear the session again
///
/// A table without data rows yields a check with no report rather than an
/// error.
pub fn check_source(session: &mut CheckSession, source: &InputSource, text: &str) -> Result<TableCheck> {
    let table: Table = session.load(text).clone();

    let report = if session.is_ready() {
        Some(session.run_checks()?)
    } else {
        debug!("{}: no data rows to check", source);
        None
    };

    session.clear();

    Ok(TableCheck {
        source: source.to_string(),
        missing_expected_columns: table.missing_expected_columns(),
        headers: table.headers,
        report,
    })
}

fn render_human(checks: &[TableCheck]) {
    for (idx, check) in checks.iter().enumerate() {
        if idx > 0 {
            println!();
        }

        println!("{}", check.source.bright_cyan().bold());

        let Some(report) = &check.report else {
            print_status(&Error::NoTableLoaded.to_string());
            continue;
        };

        println!(
            "   {} rows, {} columns",
            report.rows_checked,
            check.headers.len()
        );
        if !check.missing_expected_columns.is_empty() {
            println!(
                "   {} {}",
                "Columns not in this table:".bright_black(),
                check.missing_expected_columns.join(", ").bright_black()
            );
        }

        println!();
        if report.issues.is_empty() {
            println!("   {}", messages::NO_ISSUES.green());
        } else {
            for issue in &report.issues {
                println!("   {} {}", severity_tag(issue.severity), issue.message);
            }
        }

        println!();
        println!("   Score: {} / 100", score_text(report.score));
        println!("   {}", report.label);
    }
}

/// Summary lines for the end of human output
pub fn summary_lines(stats: &RunStats) -> Vec<String> {
    let mut lines = vec![
        format!("Tables checked: {}", stats.inputs_processed),
        format!("Rows checked: {}", stats.rows_checked),
        format!("Issues found: {}", stats.issues_found),
    ];
    if let Some(lowest) = stats.lowest_score {
        lines.push(format!("Lowest score: {}", lowest));
    }
    lines.push(format!(
        "Processing time: {}",
        HumanDuration(stats.processing_time)
    ));
    lines
}

fn render_summary(stats: &RunStats) {
    if stats.inputs_processed == 0 {
        return;
    }

    println!();
    println!("{}", "Summary:".bright_cyan().bold());
    for line in summary_lines(stats) {
        println!("   {}", line);
    }
}

fn render_json(checks: &[TableCheck], stats: &RunStats) -> Result<()> {
    let output = CheckOutput {
        generated_at: Utc::now(),
        summary: CheckSummary::from(stats),
        tables: checks,
    };
    let json = serde_json::to_string_pretty(&output)
        .map_err(|e| Error::serialization("Failed to serialize check results", e))?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::Severity;
    use crate::constants::SAMPLE_CSV;

    #[test]
    fn test_check_source_sample() {
        let mut session = CheckSession::new();
        let check = check_source(&mut session, &InputSource::SampleTable, SAMPLE_CSV).unwrap();

        assert_eq!(check.source, "<sample table>");
        assert!(check.missing_expected_columns.is_empty());
        let report = check.report.unwrap();
        assert_eq!(report.score, 100);
        assert!(report.issues.is_empty());

        // The session does not keep the table between sources
        assert!(session.table().is_none());
    }

    #[test]
    fn test_check_source_header_only() {
        let mut session = CheckSession::new();
        let check = check_source(
            &mut session,
            &InputSource::Inline(String::new()),
            "company,year",
        )
        .unwrap();

        assert!(check.report.is_none());
        assert_eq!(check.headers, vec!["company", "year"]);
    }

    #[test]
    fn test_check_source_with_issues() {
        let mut session = CheckSession::new();
        let text = "company,year,scope1_tco2e,scope2_tco2e,scope3_tco2e,total_tco2e,female_pct\n\
                    Acme,2023,100,100,100,1000,120\n\
                    ,2023,,,,500,40";
        let check = check_source(&mut session, &InputSource::Stdin, text).unwrap();

        let report = check.report.unwrap();
        assert_eq!(report.count(Severity::Medium), 2);
        assert_eq!(report.count(Severity::High), 1);
        assert_eq!(report.score, 100 - 6 - 6 - 12);
        assert!(report.issues[0].message.starts_with("Row 1: Total emissions (1000)"));
        assert_eq!(report.issues[2].message, "Row 2: Missing value in \"company\"");
    }

    #[test]
    fn test_json_output_shape() {
        let mut session = CheckSession::new();
        let check = check_source(&mut session, &InputSource::SampleTable, SAMPLE_CSV).unwrap();
        let mut stats = RunStats::default();
        stats.record_check(3, 0, 100);
        let output = CheckOutput {
            generated_at: Utc::now(),
            summary: CheckSummary::from(&stats),
            tables: std::slice::from_ref(&check),
        };

        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(value["summary"]["tables_checked"], 1);
        assert_eq!(value["summary"]["lowest_score"], 100);
        assert_eq!(value["tables"][0]["report"]["score"], 100);
        assert_eq!(value["tables"][0]["source"], "<sample table>");
        assert!(value["generated_at"].is_string());
    }

    #[test]
    fn test_summary_lines_report_lowest_score() {
        let mut stats = RunStats::default();
        stats.record_check(3, 0, 100);
        stats.record_check(2, 4, 76);
        stats.processing_time = std::time::Duration::from_secs(2);

        let lines = summary_lines(&stats);
        assert_eq!(lines[0], "Tables checked: 2");
        assert_eq!(lines[1], "Rows checked: 5");
        assert_eq!(lines[2], "Issues found: 4");
        assert_eq!(lines[3], "Lowest score: 76");
        assert!(lines[4].starts_with("Processing time: "));
    }

    #[test]
    fn test_summary_lines_without_checked_tables() {
        let lines = summary_lines(&RunStats::default());
        assert_eq!(lines.len(), 4);
        assert!(!lines.iter().any(|line| line.starts_with("Lowest score")));
    }
}
