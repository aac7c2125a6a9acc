//! Error handling for the mimekit binary.

use std::{io, path::PathBuf, result};

use thiserror::Error;

/// Convenient result type for mimekit operations.
pub type Result<T> = result::Result<T, Error>;

/// Errors that can occur while running mimekit.
#[derive(Debug, Error)]
pub enum Error {
    /// Wrapper for standard I/O errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// Rule validation or database errors from the magic crate.
    #[error("{}", .0.pretty())]
    Magic(#[from] magic::Error),
    /// Form-level failures while confirming a rule.
    #[error("{0}")]
    Form(#[from] ruleform::FormError),
    /// JSON serialization failure for `sniff --json`.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Could not read a file being sniffed.
    #[error("Failed to read {}: {message}", path.display())]
    ReadFile {
        /// File that could not be read.
        path: PathBuf,
        /// Human-readable error message.
        message: String,
    },
    /// A mutating command was run without a database file.
    #[error("This command writes the database; pass --db <FILE>")]
    DbPathRequired,
    /// `check` found invalid rules.
    #[error("Database check failed: {count} invalid rule(s)")]
    InvalidRules {
        /// Number of rules that failed validation.
        count: usize,
    },
}
