//! Shared components for CLI commands
//!
//! This module contains common types, utilities, and functions used across
//! multiple CLI command implementations.

use crate::Result;
use crate::app::models::Severity;
use crate::cli::args::{Args, CheckArgs};
use crate::config::Config;
use colored::{ColoredString, Colorize};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

/// Run statistics for reporting across all commands
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    /// Number of inputs read (tables or texts)
    pub inputs_processed: usize,
    /// Number of table rows validated
    pub rows_checked: usize,
    /// Number of issues reported
    pub issues_found: usize,
    /// Number of metrics extracted from text
    pub metrics_extracted: usize,
    /// Lowest score across checked tables
    pub lowest_score: Option<i32>,
    /// Total run time
    pub processing_time: std::time::Duration,
}

impl RunStats {
    /// Record a checked table
    pub fn record_check(&mut self, rows: usize, issues: usize, score: i32) {
        self.inputs_processed += 1;
        self.rows_checked += rows;
        self.issues_found += issues;
        self.lowest_score = Some(self.lowest_score.map_or(score, |lowest| lowest.min(score)));
    }
}

/// Set up structured logging on stderr
pub fn setup_logging(config: &Config, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = config.logging.level.as_str();

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("esg_data_checker={}", log_level)));

    let result = if quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    result.map_err(|e| {
        crate::Error::configuration(format!("Failed to initialize logging: {}", e))
    })?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using the layered approach (file -> env -> args)
pub fn load_configuration(args: &Args) -> Result<Config> {
    let mut config = Config::load_layered(args.config_file.as_deref())?;
    apply_global_overrides(&mut config, args);
    config.validate()?;
    Ok(config)
}

/// Apply global CLI flag overrides to configuration
pub fn apply_global_overrides(config: &mut Config, args: &Args) {
    if let Some(level) = args.log_level_override() {
        config.logging.level = level.to_string();
    }
    if args.no_color {
        config.output.color = false;
    }
}

/// Apply check command overrides to configuration
pub fn apply_check_overrides(config: &mut Config, args: &CheckArgs) -> Result<()> {
    if let Some(tolerance) = args.tolerance {
        info!("Using reconciliation tolerance override: {}", tolerance);
        config.validation.reconciliation_tolerance = tolerance;
    }
    config.validate()
}

/// Enable or disable terminal colors for this process
pub fn configure_colors(config: &Config) {
    if !config.output.color {
        colored::control::set_override(false);
    }
}

/// Colorize a severity tag for terminal output
pub fn severity_tag(severity: Severity) -> ColoredString {
    let tag = format!("[{}]", severity);
    match severity {
        Severity::High => tag.red().bold(),
        Severity::Medium => tag.yellow(),
        Severity::Low => tag.cyan(),
    }
}

/// Colorize a score by band
pub fn score_text(score: i32) -> ColoredString {
    let text = score.to_string();
    if score >= crate::constants::STRONG_SCORE_THRESHOLD {
        text.bright_green().bold()
    } else if score >= crate::constants::USABLE_SCORE_THRESHOLD {
        text.bright_yellow().bold()
    } else {
        text.bright_red().bold()
    }
}

/// Print a user-facing status line for a degraded, non-fatal outcome
pub fn print_status(message: &str) {
    println!("{}", message.bright_black());
}

/// Create a progress bar with appropriate styling
pub fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    pb.set_message(message.to_string());
    pb
}
