//! Command implementations for the ESG checker CLI
//!
//! Each subcommand lives in its own module. This module loads configuration,
//! sets up logging and colors, then dispatches.

pub mod check;
pub mod extract;
pub mod schema;
pub mod shared;

pub use shared::RunStats;

use crate::cli::args::{Args, Commands};
use anyhow::Context;
use shared::{configure_colors, load_configuration, setup_logging};

/// Main command runner for the ESG checker
///
/// - `check`: validate CSV tables and report a quality score
/// - `extract`: pull metrics out of report text
/// - `schema`: print the expected column list
pub async fn run(args: Args) -> anyhow::Result<RunStats> {
    let config = load_configuration(&args).context("Failed to load configuration")?;
    setup_logging(&config, args.quiet)?;
    configure_colors(&config);

    let show_progress = args.show_progress();
    let Some(command) = args.command else {
        return Ok(RunStats::default());
    };

    let stats = match command {
        Commands::Check(check_args) => {
            check::run_check(check_args, config, show_progress).await?
        }
        Commands::Extract(extract_args) => extract::run_extract(extract_args).await?,
        Commands::Schema => schema::run_schema()?,
    };

    Ok(stats)
}
