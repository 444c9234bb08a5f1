//! Conquest CLI - play a territory-conquest game on the terminal.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Conquest - a console territory-conquest game
#[derive(Parser, Debug)]
#[command(name = "conquest")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Random seed for dice and mission (default: wall clock)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Summary format printed when the game ends: text or json
    #[arg(short, long, default_value = "text")]
    format: cli::SummaryFormat,

    /// Suppress the end-of-game summary
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Logs go to stderr so the game protocol on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli::play::execute(args.seed, args.format, args.quiet) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
