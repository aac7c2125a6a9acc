//! Editing session for one in-progress magic rule.
//!
//! A [`RuleForm`] owns exactly one rule being created or edited. Field
//! setters mutate freely; validity is enforced only at
//! [`validate_and_confirm`](RuleForm::validate_and_confirm), which either
//! finalizes the rule or reports which field is wrong. The session moves
//! `Editing → Accepted | Cancelled` and the terminal phases are final.

mod error;
mod form;

pub use error::FormError;
pub use form::{Phase, RuleForm};
