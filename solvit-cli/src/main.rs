//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use solvit_cli::CliError;

fn main() {
    if let Err(err) = solvit_cli::run() {
        if let CliError::ArgumentParsing(clap_err) = &err {
            clap_err.exit();
        }
        eprintln!("solvit: {err}");
        std::process::exit(1);
    }
}
