//! Command-line argument definitions for the ESG data checker
//!
//! This module defines the CLI interface using the clap derive API.

use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the ESG data checker
///
/// Checks sustainability disclosure tables and report text for data-quality
/// problems and reports a quality score.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "esg-checker",
    version,
    about = "Check ESG disclosure data for quality issues and extract metrics from report text",
    long_about = "A lightweight data-quality checker for sustainability (ESG) disclosures. \
                  Validates CSV tables of emissions, energy, water and workforce data against \
                  required-field, numeric and reconciliation rules, scores the result from 40 \
                  to 100, and heuristically extracts the same metrics from report prose."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to configuration file
    ///
    /// TOML configuration file for tolerance, scoring and output settings. If not
    /// specified, looks for esg-checker/config.toml in the user config directory.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        global = true,
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings and hides progress bars.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress logging except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long = "no-color", global = true, help = "Disable colored output")]
    pub no_color: bool,
}

/// Available subcommands for the ESG data checker
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Validate CSV disclosure tables and report a quality score
    Check(CheckArgs),
    /// Extract metrics from free-form report text
    Extract(ExtractArgs),
    /// Show the expected CSV column schema
    Schema,
}

/// Arguments for the check command
#[derive(Debug, Clone, Parser)]
pub struct CheckArgs {
    /// CSV files or directories to check
    ///
    /// Directories are searched recursively for .csv files. Use "-" to read
    /// from standard input. Each file is checked as its own table.
    #[arg(value_name = "INPUT")]
    pub inputs: Vec<PathBuf>,

    /// Check the built-in three-row sample table
    #[arg(long = "sample", help = "Check the built-in sample table")]
    pub sample: bool,

    /// Reconciliation tolerance override
    ///
    /// Relative difference allowed between the scope 1-3 sum and the total,
    /// e.g. 0.15 for 15%.
    #[arg(
        short = 't',
        long = "tolerance",
        value_name = "FRACTION",
        help = "Relative tolerance for total vs scope sum (default 0.15)"
    )]
    pub tolerance: Option<f64>,

    /// Output format for results
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,
}

/// Arguments for the extract command
#[derive(Debug, Clone, Parser)]
pub struct ExtractArgs {
    /// Report text file, or "-" for standard input
    #[arg(value_name = "INPUT", conflicts_with_all = ["text", "sample"])]
    pub input: Option<PathBuf>,

    /// Report text given inline
    #[arg(long = "text", value_name = "TEXT", conflicts_with = "sample")]
    pub text: Option<String>,

    /// Extract from the built-in sample report text
    #[arg(long = "sample", help = "Extract from the built-in sample report text")]
    pub sample: bool,

    /// Output format for results
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Log level implied by the verbosity flags, if any were given
    pub fn log_level_override(&self) -> Option<&'static str> {
        if self.quiet {
            return Some("error");
        }
        match self.verbose {
            0 => None,
            1 => Some("info"),
            2 => Some("debug"),
            _ => Some("trace"),
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl CheckArgs {
    /// Validate the check command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(tolerance) = self.tolerance {
            if !tolerance.is_finite() || !(0.0..=1.0).contains(&tolerance) {
                return Err(Error::configuration(format!(
                    "Tolerance must be between 0 and 1, got {}",
                    tolerance
                )));
            }
        }

        for input in &self.inputs {
            if input.as_os_str() != "-" && !input.exists() {
                return Err(Error::file_not_found(input.display().to_string()));
            }
        }

        Ok(())
    }

    /// Whether no table source was given at all
    pub fn has_no_input(&self) -> bool {
        self.inputs.is_empty() && !self.sample
    }
}

impl ExtractArgs {
    /// Validate the extract command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(input) = &self.input {
            if input.as_os_str() != "-" && !input.is_file() {
                return Err(Error::file_not_found(input.display().to_string()));
            }
        }
        Ok(())
    }
}
