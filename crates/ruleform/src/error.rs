//! Error type for form confirmation.

use thiserror::Error;

use crate::form::Phase;

/// Errors surfaced when confirming a rule form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    /// A rule invariant is violated; the inner error names the field.
    #[error(transparent)]
    Rule(#[from] magic::Error),
    /// The form was already accepted or cancelled.
    #[error("form is closed ({phase:?})")]
    Closed {
        /// Terminal phase the form is in.
        phase: Phase,
    },
}
