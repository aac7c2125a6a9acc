//! Core rule types: pattern kinds and the magic rule record.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{defaults, error::Error, pattern};

/// Interpretation of a rule's textual `value`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MagicKind {
    /// Literal byte string; the value may use C-style escapes.
    #[default]
    String,
    /// Single byte (0..=255).
    Byte,
    /// 16-bit integer, big-endian on disk.
    Big16,
    /// 32-bit integer, big-endian on disk.
    Big32,
    /// 16-bit integer, little-endian on disk.
    Little16,
    /// 32-bit integer, little-endian on disk.
    Little32,
    /// 16-bit integer in the host's native byte order.
    Host16,
    /// 32-bit integer in the host's native byte order.
    Host32,
}

impl MagicKind {
    /// All kinds, in the order they are presented to users.
    pub const ALL: [Self; 8] = [
        Self::String,
        Self::Byte,
        Self::Big16,
        Self::Big32,
        Self::Little16,
        Self::Little32,
        Self::Host16,
        Self::Host32,
    ];

    /// Canonical lowercase name, matching the serialized form.
    pub fn name(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Byte => "byte",
            Self::Big16 => "big16",
            Self::Big32 => "big32",
            Self::Little16 => "little16",
            Self::Little32 => "little32",
            Self::Host16 => "host16",
            Self::Host32 => "host32",
        }
    }

    /// Encoded pattern width in bytes for numeric kinds; `None` for strings.
    pub fn width(self) -> Option<usize> {
        match self {
            Self::String => None,
            Self::Byte => Some(1),
            Self::Big16 | Self::Little16 | Self::Host16 => Some(2),
            Self::Big32 | Self::Little32 | Self::Host32 => Some(4),
        }
    }
}

impl fmt::Display for MagicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MagicKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        Self::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| Error::UnknownKind {
                name: s.to_string(),
            })
    }
}

/// One byte-pattern matching rule used to sniff a file's content type.
///
/// The default-constructed rule (empty value, `string` kind, zero range,
/// default priority) is the "new rule" sentinel used by editing forms; it is
/// well-formed but not valid until a pattern is supplied.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct MagicRule {
    /// Textual pattern, interpreted per `kind`.
    pub value: String,
    /// How `value` is decoded into bytes.
    #[serde(default)]
    pub kind: MagicKind,
    /// First candidate offset (inclusive) where the pattern may start.
    #[serde(default)]
    pub range_start: u32,
    /// Last candidate offset (inclusive) where the pattern may start.
    #[serde(default)]
    pub range_end: u32,
    /// Tie-break rank when several rules match; higher wins.
    #[serde(default = "defaults::default_priority")]
    pub priority: u32,
}

impl Default for MagicRule {
    fn default() -> Self {
        Self {
            value: String::new(),
            kind: MagicKind::default(),
            range_start: 0,
            range_end: 0,
            priority: defaults::DEFAULT_PRIORITY,
        }
    }
}

impl MagicRule {
    /// Construct a rule from parts.
    pub fn new(
        value: impl Into<String>,
        kind: MagicKind,
        range_start: u32,
        range_end: u32,
        priority: u32,
    ) -> Self {
        Self {
            value: value.into(),
            kind,
            range_start,
            range_end,
            priority,
        }
    }

    /// Check the rule's invariants without mutating it.
    ///
    /// Failure identifies the offending field: [`Error::EmptyPattern`] for a
    /// missing value, [`Error::InvalidRange`] for an inverted window, and a
    /// decode error when the value does not suit the kind.
    pub fn validate(&self) -> Result<(), Error> {
        if self.value.is_empty() {
            return Err(Error::EmptyPattern);
        }
        if self.range_start > self.range_end {
            return Err(Error::InvalidRange {
                start: self.range_start,
                end: self.range_end,
            });
        }
        let bytes = self.pattern_bytes()?;
        if bytes.is_empty() {
            return Err(Error::EmptyPattern);
        }
        Ok(())
    }

    /// Decode the textual value into the concrete bytes matched on disk.
    pub fn pattern_bytes(&self) -> Result<Vec<u8>, Error> {
        pattern::decode(self.kind, &self.value)
    }

    /// Whether the pattern occurs in `data`, starting at any offset within
    /// `range_start..=range_end`. A rule whose value fails to decode never
    /// matches.
    pub fn matches(&self, data: &[u8]) -> bool {
        let Ok(pat) = self.pattern_bytes() else {
            return false;
        };
        if pat.is_empty() || self.range_start > self.range_end {
            return false;
        }
        let Some(last_fit) = data.len().checked_sub(pat.len()) else {
            return false;
        };
        let start = self.range_start as usize;
        let end = (self.range_end as usize).min(last_fit);
        (start..=end).any(|off| data[off..off + pat.len()] == pat[..])
    }

    /// Longest data prefix this rule can ever inspect, in bytes.
    pub fn probe_len(&self) -> usize {
        let pat_len = self.pattern_bytes().map(|p| p.len()).unwrap_or(0);
        self.range_end as usize + pat_len
    }
}
