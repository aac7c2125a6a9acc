//! Default priorities, recommended ranges, and the builtin rule table.

use crate::{
    db::{MagicDb, MagicEntry},
    rule::{MagicKind, MagicRule},
};

/// Conventional midpoint priority for new rules.
pub const DEFAULT_PRIORITY: u32 = 50;

/// Search window applied to string patterns by the recommended defaults;
/// text magics are often preceded by a BOM or stray whitespace.
pub(crate) const STRING_SEARCH_WINDOW: u32 = 4;

// Serde default function
pub(crate) const fn default_priority() -> u32 {
    DEFAULT_PRIORITY
}

/// Range and priority suggested for a rule of a given kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommended {
    /// Suggested first candidate offset.
    pub range_start: u32,
    /// Suggested last candidate offset.
    pub range_end: u32,
    /// Suggested priority.
    pub priority: u32,
}

/// Recommended range/priority for `kind`.
///
/// Fixed-width numeric magics sit at an exact offset, so they get the point
/// window `0..=0`; string magics get a small search window.
pub const fn recommended(kind: MagicKind) -> Recommended {
    let range_end = match kind {
        MagicKind::String => STRING_SEARCH_WINDOW,
        _ => 0,
    };
    Recommended {
        range_start: 0,
        range_end,
        priority: DEFAULT_PRIORITY,
    }
}

/// Shorthand for one builtin entry.
fn entry(mime_type: &str, rules: Vec<MagicRule>) -> MagicEntry {
    MagicEntry {
        mime_type: mime_type.to_string(),
        rules,
    }
}

/// Shorthand for a string rule anchored at offset zero.
fn anchored(value: &str, priority: u32) -> MagicRule {
    MagicRule::new(value, MagicKind::String, 0, 0, priority)
}

/// The builtin rule table, used when no database file is supplied.
///
/// A small selection of widely deployed magics; values follow the escape
/// syntax accepted by string rules.
pub fn builtin() -> MagicDb {
    MagicDb::from_entries(vec![
        entry("image/png", vec![anchored("\\x89PNG\\r\\n\\x1a\\n", 50)]),
        entry("image/gif", vec![anchored("GIF87a", 50), anchored("GIF89a", 50)]),
        entry("image/jpeg", vec![anchored("\\xff\\xd8\\xff", 50)]),
        entry(
            "application/zip",
            vec![anchored("PK\\x03\\x04", 45), anchored("PK\\x05\\x06", 45)],
        ),
        entry("application/gzip", vec![MagicRule::new(
            "0x1F8B",
            MagicKind::Big16,
            0,
            0,
            45,
        )]),
        entry("application/x-bzip2", vec![anchored("BZh", 40)]),
        entry("application/pdf", vec![MagicRule::new(
            "%PDF-",
            MagicKind::String,
            0,
            STRING_SEARCH_WINDOW,
            50,
        )]),
        entry(
            "application/x-executable",
            vec![anchored("\\x7fELF", 50)],
        ),
        entry("application/xml", vec![MagicRule::new(
            "<?xml",
            MagicKind::String,
            0,
            STRING_SEARCH_WINDOW,
            40,
        )]),
        entry("application/x-tar", vec![MagicRule::new(
            "ustar",
            MagicKind::String,
            257,
            257,
            50,
        )]),
    ])
}
