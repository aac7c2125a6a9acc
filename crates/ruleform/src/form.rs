//! The form state machine.

use magic::{MagicKind, MagicRule, recommended};
use tracing::debug;

use crate::error::FormError;

/// Lifecycle phase of a [`RuleForm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Fields are mutable; nothing has been finalized.
    #[default]
    Editing,
    /// The rule was validated and handed to the caller.
    Accepted,
    /// The session was abandoned; the in-progress rule is discarded.
    Cancelled,
}

/// One editing session over one in-progress rule.
///
/// The form never rejects reads or edits: [`rule`](Self::rule) returns the
/// current, possibly invalid, state. Invariants are checked only at
/// confirmation time, mirroring a dialog that highlights a bad field when OK
/// is pressed rather than while typing.
#[derive(Debug, Clone)]
pub struct RuleForm {
    /// Textual pattern field.
    value: String,
    /// Selected pattern kind.
    kind: MagicKind,
    /// Start-offset field.
    range_start: u32,
    /// End-offset field.
    range_end: u32,
    /// Priority field.
    priority: u32,
    /// Where the session is in its lifecycle.
    phase: Phase,
}

impl Default for RuleForm {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleForm {
    /// Open a fresh form holding the "new rule" sentinel.
    pub fn new() -> Self {
        Self::editing(&MagicRule::default())
    }

    /// Open a form pre-populated from an existing rule.
    pub fn editing(rule: &MagicRule) -> Self {
        let mut form = Self {
            value: String::new(),
            kind: MagicKind::default(),
            range_start: 0,
            range_end: 0,
            priority: 0,
            phase: Phase::Editing,
        };
        form.set_rule(rule);
        form
    }

    /// Populate every field from `rule`. Any well-formed rule is accepted;
    /// the default-constructed rule acts as the "new rule" sentinel.
    pub fn set_rule(&mut self, rule: &MagicRule) {
        self.value = rule.value.clone();
        self.kind = rule.kind;
        self.range_start = rule.range_start;
        self.range_end = rule.range_end;
        self.priority = rule.priority;
    }

    /// Package the current field values as a rule. Always succeeds; the
    /// result may be invalid until confirmation passes.
    pub fn rule(&self) -> MagicRule {
        MagicRule::new(
            self.value.clone(),
            self.kind,
            self.range_start,
            self.range_end,
            self.priority,
        )
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the form still accepts confirmation.
    pub fn is_open(&self) -> bool {
        self.phase == Phase::Editing
    }

    /// Set the textual pattern field.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Select a pattern kind.
    pub fn set_kind(&mut self, kind: MagicKind) {
        self.kind = kind;
    }

    /// Set the start-offset field.
    pub fn set_range_start(&mut self, start: u32) {
        self.range_start = start;
    }

    /// Set the end-offset field.
    pub fn set_range_end(&mut self, end: u32) {
        self.range_end = end;
    }

    /// Set the priority field.
    pub fn set_priority(&mut self, priority: u32) {
        self.priority = priority;
    }

    /// When `enabled`, overwrite the range and priority fields with the
    /// recommended values for the currently selected kind; when not, leave
    /// every field as the user set it. In-progress state only.
    pub fn apply_recommended(&mut self, enabled: bool) {
        if !enabled {
            return;
        }
        let rec = recommended(self.kind);
        self.range_start = rec.range_start;
        self.range_end = rec.range_end;
        self.priority = rec.priority;
    }

    /// Check the rule invariants and, on success, finalize the session.
    ///
    /// Failures leave the form open so the user can fix the named field;
    /// success transitions to [`Phase::Accepted`] and returns the rule for
    /// the caller to insert into its rule set.
    pub fn validate_and_confirm(&mut self) -> Result<MagicRule, FormError> {
        if self.phase != Phase::Editing {
            return Err(FormError::Closed { phase: self.phase });
        }
        let rule = self.rule();
        rule.validate()?;
        self.phase = Phase::Accepted;
        debug!(kind = %rule.kind, priority = rule.priority, "rule confirmed");
        Ok(rule)
    }

    /// Abandon the session, discarding the in-progress rule. Idempotent on
    /// an already-closed form.
    pub fn cancel(&mut self) {
        if self.phase == Phase::Editing {
            self.phase = Phase::Cancelled;
        }
    }
}
