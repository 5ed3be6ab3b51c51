//! Command-line interface for the Solvit route optimizer.
//!
//! The `optimize` subcommand reads a JSON-encoded request holding a start
//! position and the day's jobs, orders the jobs, and prints the optimised
//! route as JSON on standard output.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod fs;
mod optimize;

pub use error::CliError;
use optimize::{OptimizeArgs, run_optimize};

pub(crate) const ARG_REQUEST: &str = "request";
pub(crate) const ARG_MAX_EXACT_JOBS: &str = "max-exact-jobs";
pub(crate) const ARG_OVERFLOW: &str = "overflow";
pub(crate) const ARG_PRUNE: &str = "prune";
pub(crate) const ENV_REQUEST: &str = "SOLVIT_CMDS_OPTIMIZE_REQUEST_PATH";

/// Run the Solvit CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns [`CliError`] when argument parsing, configuration merging,
/// request loading, optimisation, or output fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Optimize(args) => run_optimize(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "solvit",
    about = "Route planning utilities for Solvit service providers",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Order a provider's jobs to minimise round-trip distance.
    Optimize(OptimizeArgs),
}

#[cfg(test)]
mod tests;
