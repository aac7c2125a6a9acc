//! Error types for rule validation and database loading.

use std::path::PathBuf;

use thiserror::Error;

use crate::rule::MagicKind;

/// Errors produced while validating rules or loading a rule database.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The rule's pattern decodes to zero bytes.
    #[error("magic pattern is empty")]
    EmptyPattern,
    /// The offset window is inverted.
    #[error("invalid offset range: start {start} is past end {end}")]
    InvalidRange {
        /// First candidate offset (inclusive).
        start: u32,
        /// Last candidate offset (inclusive).
        end: u32,
    },
    /// A numeric kind's value does not parse, or does not fit the width.
    #[error("'{value}' is not a valid {kind} value")]
    InvalidNumber {
        /// The offending textual value.
        value: String,
        /// The kind the value was parsed for.
        kind: MagicKind,
    },
    /// A string pattern contains a malformed escape sequence.
    #[error("invalid escape sequence in '{value}' at byte {pos}")]
    InvalidEscape {
        /// The offending textual value.
        value: String,
        /// Byte offset of the backslash that started the bad escape.
        pos: usize,
    },
    /// A kind name did not match any known [`MagicKind`].
    #[error("unknown magic kind '{name}'")]
    UnknownKind {
        /// The unrecognized kind name.
        name: String,
    },
    /// No rule exists at the given position in the database.
    #[error("no rule at index {index} for '{mime_type}'")]
    RuleNotFound {
        /// Mime type whose rule list was addressed.
        mime_type: String,
        /// Index into that rule list.
        index: usize,
    },
    /// I/O or filesystem error while reading or writing a database file.
    #[error("{message}")]
    Read {
        /// Optional path associated with the read error.
        path: Option<PathBuf>,
        /// Human-readable error message.
        message: String,
    },
    /// RON parse or serialize error for a database file.
    #[error("{message}")]
    Parse {
        /// Optional path associated with the parse error.
        path: Option<PathBuf>,
        /// Human-readable error message.
        message: String,
    },
}

impl Error {
    /// Render a human-friendly message including the file path when available.
    pub fn pretty(&self) -> String {
        match self {
            Self::Read { path, message } => match path {
                Some(p) => format!("Read error at {}: {}", p.display(), message),
                None => format!("Read error: {}", message),
            },
            Self::Parse { path, message } => match path {
                Some(p) => format!("Database parse error at {}: {}", p.display(), message),
                None => format!("Database parse error: {}", message),
            },
            other => other.to_string(),
        }
    }
}
