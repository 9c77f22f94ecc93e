use clap::Parser;
use esg_data_checker::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    match runtime.block_on(commands::run(args)) {
        Ok(_stats) => {
            // Results have already been printed by the command
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("ESG Checker - Sustainability Disclosure Data Quality");
    println!("====================================================");
    println!();
    println!("Validate ESG disclosure tables for missing, implausible and");
    println!("inconsistent values, and extract metrics from report prose.");
    println!();
    println!("USAGE:");
    println!("    esg-checker <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    check       Validate CSV tables and report a quality score");
    println!("    extract     Extract metrics from free-form report text");
    println!("    schema      Show the expected CSV columns");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Check the built-in sample table:");
    println!("    esg-checker check --sample");
    println!();
    println!("    # Check every CSV under a directory, as JSON:");
    println!("    esg-checker check reports/ --format json");
    println!();
    println!("    # Extract metrics from a report excerpt:");
    println!("    esg-checker extract --text \"Scope 1 emissions were 1,200 tCO2e in 2023\"");
    println!();
    println!("For detailed help on any command, use:");
    println!("    esg-checker <COMMAND> --help");
}
