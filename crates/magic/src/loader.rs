//! Load and save rule databases on disk (RON).

use std::{ffi::OsStr, fs, path::Path};

use crate::{db::MagicDb, error::Error};

/// Load a [`MagicDb`] from a RON file at `path`.
pub fn load_from_path(path: &Path) -> Result<MagicDb, Error> {
    if path.extension() != Some(OsStr::new("ron")) {
        return Err(Error::Read {
            path: Some(path.to_path_buf()),
            message: "Unsupported database format (expected a .ron file)".to_string(),
        });
    }
    let text = fs::read_to_string(path).map_err(|e| Error::Read {
        path: Some(path.to_path_buf()),
        message: e.to_string(),
    })?;
    load_from_str(&text, Some(path))
}

/// Parse a database from RON text. `path` is carried into errors only.
pub fn load_from_str(text: &str, path: Option<&Path>) -> Result<MagicDb, Error> {
    ron::from_str(text).map_err(|e| Error::Parse {
        path: path.map(Path::to_path_buf),
        message: e.to_string(),
    })
}

/// Serialize `db` as pretty RON and write it to `path`.
pub fn save_to_path(db: &MagicDb, path: &Path) -> Result<(), Error> {
    let text = ron::ser::to_string_pretty(db, ron::ser::PrettyConfig::default()).map_err(|e| {
        Error::Parse {
            path: Some(path.to_path_buf()),
            message: e.to_string(),
        }
    })?;
    fs::write(path, text).map_err(|e| Error::Read {
        path: Some(path.to_path_buf()),
        message: e.to_string(),
    })
}
