//! The `list` and `check` subcommands: inspect a rule database.

use std::path::Path;

use crate::{
    error::{Error, Result},
    store,
};

/// Print every entry and rule in the database.
pub fn list(db_path: Option<&Path>) -> Result<()> {
    let db = store::open(db_path)?;
    if db.entries().is_empty() {
        println!("no rules");
        return Ok(());
    }
    for entry in db.entries() {
        println!("{}", entry.mime_type);
        for (index, rule) in entry.rules.iter().enumerate() {
            println!(
                "  [{index}] {} '{}' @ {}..={} priority {}",
                rule.kind, rule.value, rule.range_start, rule.range_end, rule.priority,
            );
        }
    }
    Ok(())
}

/// Validate every rule; report each failure and exit nonzero if any.
pub fn check(db_path: Option<&Path>) -> Result<()> {
    let db = store::open(db_path)?;
    let issues = db.check();
    if issues.is_empty() {
        println!("{} rule(s) ok", db.rule_count());
        return Ok(());
    }
    for issue in &issues {
        eprintln!(
            "{} [{}]: {}",
            issue.mime_type,
            issue.index,
            issue.error.pretty(),
        );
    }
    Err(Error::InvalidRules {
        count: issues.len(),
    })
}
