//! Magic-byte rule model used to sniff a file's mime type.
//!
//! A [`MagicRule`] describes one byte pattern (a literal string or a
//! fixed-width integer), the inclusive offset window where it may start, and
//! a priority used to break ties when several rules match. Rules are grouped
//! by mime type in a [`MagicDb`], which can be persisted as RON and asked to
//! [`sniff`](MagicDb::sniff) candidate data.

mod db;
mod defaults;
mod error;
mod loader;
mod pattern;
mod rule;

#[cfg(test)]
mod test_db;
#[cfg(test)]
mod test_match;
#[cfg(test)]
mod test_pattern;

pub use db::{MagicDb, MagicEntry, Match, RuleIssue};
pub use defaults::{DEFAULT_PRIORITY, Recommended, builtin, recommended};
pub use error::Error;
pub use loader::{load_from_path, load_from_str, save_to_path};
pub use rule::{MagicKind, MagicRule};
