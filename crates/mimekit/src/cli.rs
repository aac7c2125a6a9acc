//! Command-line interface definitions for mimekit.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use logging::LogArgs;
use magic::MagicKind;

/// Command-line interface for the `mimekit` binary.
#[derive(Parser, Debug)]
#[command(
    name = "mimekit",
    about = "Edit magic-rule databases and sniff file types",
    version
)]
pub struct Cli {
    /// Logging controls shared across mimekit binaries.
    #[command(flatten)]
    pub log: LogArgs,

    /// Rule database file (RON). Read-only commands fall back to the
    /// builtin rule table when omitted.
    #[arg(long, global = true, value_name = "FILE")]
    pub db: Option<PathBuf>,

    /// Which operation to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level mimekit commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Detect the mime type of one or more files.
    Sniff(SniffArgs),
    /// Print the database contents.
    List,
    /// Validate every rule in the database.
    Check,
    /// Validate a new rule and append it to the database.
    Add(AddArgs),
    /// Delete a rule by mime type and index.
    Remove(RemoveArgs),
}

/// Arguments for the `sniff` subcommand.
#[derive(Args, Debug, Clone)]
pub struct SniffArgs {
    /// Files to sniff.
    #[arg(value_name = "FILE", num_args = 1..)]
    pub paths: Vec<PathBuf>,

    /// Emit results as JSON instead of plain text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `add` subcommand.
#[derive(Args, Debug, Clone)]
pub struct AddArgs {
    /// Mime type the rule detects, e.g. `image/png`.
    #[arg(long, value_name = "TYPE")]
    pub mime: String,

    /// Textual pattern; string kinds accept C-style escapes, numeric kinds
    /// a decimal or 0x-prefixed literal.
    #[arg(long, value_name = "PATTERN")]
    pub value: String,

    /// Pattern kind (string|byte|big16|big32|little16|little32|host16|host32).
    #[arg(long, default_value = "string")]
    pub kind: MagicKind,

    /// Start from the recommended range and priority for the kind.
    #[arg(long)]
    pub recommended: bool,

    /// First candidate offset (inclusive).
    #[arg(long, value_name = "OFFSET")]
    pub start: Option<u32>,

    /// Last candidate offset (inclusive).
    #[arg(long, value_name = "OFFSET")]
    pub end: Option<u32>,

    /// Tie-break priority; higher wins.
    #[arg(long)]
    pub priority: Option<u32>,
}

/// Arguments for the `remove` subcommand.
#[derive(Args, Debug, Clone)]
pub struct RemoveArgs {
    /// Mime type whose rule list is addressed.
    #[arg(long, value_name = "TYPE")]
    pub mime: String,

    /// Index of the rule within that list, as shown by `list`.
    #[arg(long)]
    pub index: usize,
}
