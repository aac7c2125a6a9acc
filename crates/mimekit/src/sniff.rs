//! The `sniff` subcommand: detect mime types of files.

use std::{
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};

use serde::Serialize;
use tracing::debug;

use crate::{
    cli::SniffArgs,
    error::{Error, Result},
    store,
};

/// Sniff result for one file.
#[derive(Debug, Serialize)]
struct Report {
    /// File that was inspected.
    path: PathBuf,
    /// Detected mime type, absent when no rule matched.
    mime_type: Option<String>,
    /// Priority of the winning rule, absent when no rule matched.
    priority: Option<u32>,
}

/// Run `sniff` over every requested file.
pub fn run(args: &SniffArgs, db_path: Option<&Path>) -> Result<()> {
    let db = store::open(db_path)?;
    let probe = db.probe_len();
    debug!(probe, rules = db.rule_count(), "sniffing");

    let mut reports = Vec::with_capacity(args.paths.len());
    for path in &args.paths {
        let data = read_prefix(path, probe)?;
        let hit = db.sniff(&data);
        reports.push(Report {
            path: path.clone(),
            mime_type: hit.as_ref().map(|m| m.mime_type.clone()),
            priority: hit.map(|m| m.priority),
        });
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            let mime = report.mime_type.as_deref().unwrap_or("unknown");
            println!("{}: {}", report.path.display(), mime);
        }
    }
    Ok(())
}

/// Read at most `limit` bytes from the start of `path`; rules never look
/// further than the database's probe length.
fn read_prefix(path: &Path, limit: usize) -> Result<Vec<u8>> {
    let file = File::open(path).map_err(|e| Error::ReadFile {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let mut data = Vec::with_capacity(limit.min(64 * 1024));
    file.take(limit as u64)
        .read_to_end(&mut data)
        .map_err(|e| Error::ReadFile {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    Ok(data)
}
