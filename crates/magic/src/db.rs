//! The persisted rule collection and content sniffing.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{error::Error, rule::MagicRule};

/// One mime type together with the rules that detect it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct MagicEntry {
    /// Mime type name, e.g. `image/png`.
    pub mime_type: String,
    /// Rules that identify this type; any one matching suffices.
    #[serde(default)]
    pub rules: Vec<MagicRule>,
}

/// Result of sniffing candidate data against a database.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Match {
    /// Mime type of the winning rule's entry.
    pub mime_type: String,
    /// Priority of the winning rule.
    pub priority: u32,
}

/// An invalid rule found while checking a database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleIssue {
    /// Mime type owning the offending rule.
    pub mime_type: String,
    /// Index of the rule within its entry.
    pub index: usize,
    /// The validation failure.
    pub error: Error,
}

/// Ordered collection of magic entries.
///
/// Order matters: when two matching rules carry equal priority, the earliest
/// entry (then the earliest rule within it) wins, keeping
/// [`sniff`](Self::sniff) deterministic.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct MagicDb {
    /// All entries, in tie-break order.
    #[serde(default)]
    entries: Vec<MagicEntry>,
}

impl MagicDb {
    /// Create an empty database.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a database from pre-assembled entries.
    pub fn from_entries(entries: Vec<MagicEntry>) -> Self {
        Self { entries }
    }

    /// Borrow all entries for inspection.
    pub fn entries(&self) -> &[MagicEntry] {
        &self.entries
    }

    /// Total number of rules across all entries.
    pub fn rule_count(&self) -> usize {
        self.entries.iter().map(|e| e.rules.len()).sum()
    }

    /// Append `rule` to the entry for `mime_type`, creating the entry when
    /// the type is new.
    pub fn insert(&mut self, mime_type: &str, rule: MagicRule) {
        debug!(mime_type, kind = %rule.kind, "inserting magic rule");
        match self.entries.iter_mut().find(|e| e.mime_type == mime_type) {
            Some(entry) => entry.rules.push(rule),
            None => self.entries.push(MagicEntry {
                mime_type: mime_type.to_string(),
                rules: vec![rule],
            }),
        }
    }

    /// Remove and return the rule at `index` for `mime_type`. An entry left
    /// without rules is dropped.
    pub fn remove(&mut self, mime_type: &str, index: usize) -> Result<MagicRule, Error> {
        let not_found = || Error::RuleNotFound {
            mime_type: mime_type.to_string(),
            index,
        };
        let pos = self
            .entries
            .iter()
            .position(|e| e.mime_type == mime_type)
            .ok_or_else(not_found)?;
        let entry = &mut self.entries[pos];
        if index >= entry.rules.len() {
            return Err(not_found());
        }
        let rule = entry.rules.remove(index);
        if entry.rules.is_empty() {
            self.entries.remove(pos);
        }
        Ok(rule)
    }

    /// Validate every rule, collecting the failures.
    pub fn check(&self) -> Vec<RuleIssue> {
        let mut issues = Vec::new();
        for entry in &self.entries {
            for (index, rule) in entry.rules.iter().enumerate() {
                if let Err(error) = rule.validate() {
                    issues.push(RuleIssue {
                        mime_type: entry.mime_type.clone(),
                        index,
                        error,
                    });
                }
            }
        }
        issues
    }

    /// Match `data` against every rule and return the best hit.
    ///
    /// Higher priority wins; equal priorities resolve to the earliest entry,
    /// then the earliest rule within it.
    pub fn sniff(&self, data: &[u8]) -> Option<Match> {
        let mut best: Option<(&MagicEntry, &MagicRule)> = None;
        for entry in &self.entries {
            for rule in &entry.rules {
                if !rule.matches(data) {
                    continue;
                }
                if best.is_none_or(|(_, b)| rule.priority > b.priority) {
                    best = Some((entry, rule));
                }
            }
        }
        best.map(|(entry, rule)| {
            debug!(mime_type = %entry.mime_type, priority = rule.priority, "sniff hit");
            Match {
                mime_type: entry.mime_type.clone(),
                priority: rule.priority,
            }
        })
    }

    /// Longest data prefix any rule can inspect; callers need read no more
    /// than this many bytes before calling [`sniff`](Self::sniff).
    pub fn probe_len(&self) -> usize {
        self.entries
            .iter()
            .flat_map(|e| e.rules.iter())
            .map(MagicRule::probe_len)
            .max()
            .unwrap_or(0)
    }
}
