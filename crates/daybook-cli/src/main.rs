//! Daybook CLI - a single-user daily journal, one entry per calendar day.
//!
//! This is the command-line presentation surface over daybook-core.

mod cli;
mod commands;
mod config;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    // Absorbed storage failures in the core are logged through tracing;
    // stderr keeps command output pipeable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("DAYBOOK_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();
    if let Err(err) = commands::dispatch(&cli) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
