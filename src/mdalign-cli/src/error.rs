//! Error types for the alignment run.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for alignment runs.
pub type AlignResult<T> = Result<T, AlignError>;

/// Errors that can occur while walking the tree and processing files.
#[derive(Debug, Error)]
pub enum AlignError {
    /// The root argument does not exist or is not a directory.
    #[error("{path} is not a directory")]
    NotADirectory { path: PathBuf },

    /// Failed to read a file.
    #[error("Failed to read file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a file back.
    #[error("Failed to write file {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal failed.
    #[error("{0}")]
    WalkError(#[from] walkdir::Error),
}

impl AlignError {
    /// Create a not-a-directory error.
    pub fn not_a_directory(path: impl Into<PathBuf>) -> Self {
        Self::NotADirectory { path: path.into() }
    }

    /// Create a read error.
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Create a write error.
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteError {
            path: path.into(),
            source,
        }
    }

    /// Whether this error should abort the whole run.
    ///
    /// Per-file read/write failures are reported and skipped; traversal and
    /// startup failures are fatal.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::NotADirectory { .. } | Self::WalkError(_))
    }
}
