//! Database resolution: file-backed when `--db` is given, builtin otherwise.

use std::path::Path;

use magic::MagicDb;
use tracing::debug;

use crate::error::Result;

/// Open a database for read-only commands. Falls back to the builtin rule
/// table when no path is given.
pub fn open(path: Option<&Path>) -> Result<MagicDb> {
    match path {
        Some(p) => {
            debug!(path = %p.display(), "loading rule database");
            Ok(magic::load_from_path(p)?)
        }
        None => {
            debug!("no database file; using builtin rules");
            Ok(magic::builtin())
        }
    }
}

/// Open a database for editing. A missing file yields an empty database so
/// the first `add` can create it; other read failures propagate.
pub fn open_for_edit(path: &Path) -> Result<MagicDb> {
    if path.exists() {
        Ok(magic::load_from_path(path)?)
    } else {
        debug!(path = %path.display(), "database file absent; starting empty");
        Ok(MagicDb::new())
    }
}

/// Persist `db` to `path`.
pub fn save(db: &MagicDb, path: &Path) -> Result<()> {
    magic::save_to_path(db, path)?;
    debug!(path = %path.display(), rules = db.rule_count(), "database saved");
    Ok(())
}
