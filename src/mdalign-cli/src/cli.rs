//! CLI argument structures and parsing.

use clap::Parser;
use std::path::PathBuf;

/// Log verbosity level for CLI output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    /// Only show errors
    Error,
    /// Show warnings and errors (default)
    #[default]
    Warn,
    /// Show informational messages, warnings, and errors
    Info,
    /// Show debug messages and above
    Debug,
    /// Show all messages including trace-level details
    Trace,
}

impl LogLevel {
    /// Convert to tracing filter string.
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// mdalign - align Markdown pipe-tables across a directory tree.
///
/// Scans the directory recursively for `.md` files (case-insensitive),
/// realigns every pipe-table in them, and rewrites changed files in place.
/// With `--check` nothing is written; changed files are reported and the
/// exit code signals whether any file needs alignment.
#[derive(Debug, Parser)]
#[command(name = "mdalign")]
#[command(author, version)]
#[command(about = "Align Markdown pipe-tables in a directory tree", long_about = None)]
pub struct Cli {
    /// Directory to scan recursively for Markdown files
    pub directory: PathBuf,

    /// Check mode: report files needing alignment, write nothing,
    /// exit non-zero if changes are needed (CI-friendly)
    #[arg(long)]
    pub check: bool,

    /// Log verbosity (overridden by the MDALIGN_LOG environment variable)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,
}
