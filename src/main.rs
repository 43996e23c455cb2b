//! tm-combos CLI
//!
//! Prints every length-8 combination with replacement of the 20 transition
//! tokens to stdout, one per line. Diagnostics go to stderr.

use anyhow::Context;
use clap::Parser;
use std::io;
use std::process::ExitCode;
use tm_combos::{write_enumeration, Enumerator, OutputError};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

/// Enumerate Turing machine transition token combinations
#[derive(Parser, Debug)]
#[command(name = "tm-combos")]
#[command(version)]
#[command(about = "Print every 8-token combination of the 20 transition tokens", long_about = None)]
struct Cli {}

fn main() -> ExitCode {
    let _cli = Cli::parse();
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let closed = err
                .downcast_ref::<OutputError>()
                .filter(|output| output.is_broken_pipe());
            if let Some(output) = closed {
                debug!(
                    delivered = output.delivered(),
                    "stdout closed before enumeration finished"
                );
            } else {
                error!("{err:#}");
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run() -> anyhow::Result<()> {
    let enumerator = Enumerator::standard();
    let stdout = io::stdout().lock();

    let summary =
        write_enumeration(&enumerator, stdout).context("Failed to write combinations to stdout")?;

    debug!(lines = summary.lines, "enumeration complete");
    Ok(())
}
