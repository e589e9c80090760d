//! folio command-line entry point

use clap::Parser;
use folio_cli::commands::Commands;
use std::process::ExitCode;

/// Page-aware chunking and lexical preprocessing for document corpora
#[derive(Debug, Parser)]
#[command(name = "folio", version, about, long_about = None)]
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
