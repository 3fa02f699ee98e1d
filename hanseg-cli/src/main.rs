//! hanseg command-line entry point

use clap::Parser;
use hanseg_cli::commands::Commands;
use std::process::ExitCode;

/// Korean sentence splitting
#[derive(Debug, Parser)]
#[command(name = "hanseg", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
