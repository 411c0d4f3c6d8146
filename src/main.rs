//! orgdot CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, build or render
//! the chart, and exit with a non-zero status and a readable message on failure.
//! For programmatic use, prefer the library API (`orgdot::api`).

use std::process::ExitCode;

use clap::Parser;

mod cli;

fn main() -> ExitCode {
    let args = cli::CliArgs::parse();
    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
