//! Extract command implementation
//!
//! Reads report text from a file, standard input, the command line or the
//! built-in sample and prints the metrics the extractor recognizes.

use super::shared::{RunStats, print_status};
use crate::app::models::ExtractedMetrics;
use crate::app::services::text_extractor::extract;
use crate::app::services::row_validator::numeric::format_number;
use crate::cli::args::{ExtractArgs, OutputFormat};
use crate::cli::input::{InputSource, resolve_path};
use crate::constants::messages;
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::Serialize;
use std::time::Instant;
use tracing::{debug, info};

/// JSON document emitted by `extract --format json`
#[derive(Debug, Serialize)]
struct ExtractOutput<'a> {
    generated_at: DateTime<Utc>,
    source: String,
    metrics: &'a ExtractedMetrics,
}

/// Extract command runner
pub async fn run_extract(args: ExtractArgs) -> Result<RunStats> {
    let start_time = Instant::now();
    let mut stats = RunStats::default();

    debug!("Extract arguments: {:?}", args);
    args.validate()?;

    let source = select_source(&args)?;
    let text = source.read().await?;

    if text.trim().is_empty() {
        print_status(messages::NO_REPORT_TEXT);
        return Ok(stats);
    }

    let metrics = extract(&text);
    stats.inputs_processed = 1;
    stats.metrics_extracted = metrics.len();

    match args.output_format {
        OutputFormat::Human => render_human(&source, &metrics),
        OutputFormat::Json => render_json(&source, &metrics)?,
    }

    stats.processing_time = start_time.elapsed();
    info!(
        "Extraction completed in {:.2}s: {} metrics",
        stats.processing_time.as_secs_f64(),
        stats.metrics_extracted
    );

    Ok(stats)
}

/// Pick the text source named by the arguments, defaulting to standard input
pub fn select_source(args: &ExtractArgs) -> Result<InputSource> {
    if args.sample {
        return Ok(InputSource::SampleText);
    }
    if let Some(text) = &args.text {
        return Ok(InputSource::Inline(text.clone()));
    }
    match &args.input {
        Some(path) => resolve_path(path),
        None => Ok(InputSource::Stdin),
    }
}

/// Render extracted metrics as `key: value` lines
pub fn format_metrics(metrics: &ExtractedMetrics) -> Vec<String> {
    metrics
        .iter()
        .map(|(key, value)| format!("{}: {}", key, format_number(value)))
        .collect()
}

fn render_human(source: &InputSource, metrics: &ExtractedMetrics) {
    println!("{}", source.to_string().bright_cyan().bold());
    println!();

    if metrics.is_empty() {
        print_status(messages::NOTHING_EXTRACTED);
        print_status(messages::NO_METRICS_FOUND);
        return;
    }

    for line in format_metrics(metrics) {
        println!("   {}", line);
    }

    println!();
    println!("{}", messages::EXTRACTION_CAVEAT.bright_black());
}

fn render_json(source: &InputSource, metrics: &ExtractedMetrics) -> Result<()> {
    let output = ExtractOutput {
        generated_at: Utc::now(),
        source: source.to_string(),
        metrics,
    };
    let json = serde_json::to_string_pretty(&output)
        .map_err(|e| Error::serialization("Failed to serialize extracted metrics", e))?;
    println!("{}", json);
    Ok(())
}
