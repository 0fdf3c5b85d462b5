//! mdalign - Main entry point.
//!
//! Parses arguments, initializes logging, runs the aligner over the given
//! directory tree, and maps the outcome to exit codes:
//!
//! - 0: success (and, in check mode, no file needed alignment)
//! - 1: usage error, invalid directory, traversal failure, or check-mode
//!   findings

use std::process::ExitCode;

use clap::Parser;

use mdalign_cli::cli::Cli;
use mdalign_cli::error::AlignError;
use mdalign_cli::runner::{AlignOptions, run};

/// Set up tracing to stderr, filtered by the CLI flag or `MDALIGN_LOG`.
fn init_logging(cli: &Cli) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env("MDALIGN_LOG")
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level.as_filter_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    // Spec'd exit code for usage errors is 1, not clap's default 2.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            use clap::error::ErrorKind;
            err.print().ok();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    init_logging(&cli);

    let options = AlignOptions {
        check_only: cli.check,
    };

    match run(&cli.directory, &options) {
        Ok(summary) => {
            if options.check_only && summary.files_changed > 0 {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(err @ AlignError::WalkError(_)) => {
            eprintln!("Error walking directory: {err}");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
