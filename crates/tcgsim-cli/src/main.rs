//! TCG Sim replay tool entry point.

use std::error::Error;
use std::io::Write;

use clap::Parser;
use tcgsim_cli::cli::Cli;
use tcgsim_cli::draw;
use tcgsim_cli::error::CliError;
use tcgsim_core::clock::SystemClock;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    // Logs go to stderr; stdout carries only the report.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let report = draw::run(&cli, &SystemClock)?;

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &report).map_err(CliError::from)?;
    writeln!(stdout).map_err(CliError::from)?;

    Ok(())
}
