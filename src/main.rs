//! Jrun: run Java classes and Maven tests from anywhere inside a Maven project.
//!
//! This is the main entry point for the `jrun` CLI. It parses arguments,
//! dispatches to the appropriate command handler, and converts results into
//! process exit codes. A child process's exit code is passed through
//! unchanged; internal failures exit with code 1.

mod cli;
mod commands;
pub mod classpath;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod invocation;
pub mod project;
pub mod resolver;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match commands::dispatch(cli.command) {
        Ok(code) => ExitCode::from(code.clamp(0, 255) as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
