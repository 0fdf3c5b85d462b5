//! mdalign CLI - driver around the table aligner.
//!
//! The binary owns argument parsing, logging setup, and exit codes; the
//! modules here carry the pieces integration tests exercise directly:
//!
//! - `cli` - clap argument structures
//! - `error` - typed run errors
//! - `runner` - directory traversal and per-file processing

pub mod cli;
pub mod error;
pub mod runner;

pub use cli::{Cli, LogLevel};
pub use error::{AlignError, AlignResult};
pub use runner::{AlignOptions, RunSummary, process_file, run};
