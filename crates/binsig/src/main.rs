//! binsig CLI - self-integrity verification.

mod cli;
mod commands;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;

fn main() {
    let cli = Cli::parse();

    // Diagnostics go to stderr; stdout carries only the digest or the
    // match/mismatch verdict.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("binsig=warn".parse().unwrap()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    std::process::exit(commands::run_command(&cli));
}
