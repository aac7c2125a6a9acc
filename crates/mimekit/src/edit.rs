//! The `add` and `remove` subcommands: mutate a rule database through a
//! validated editing session.

use std::path::Path;

use ruleform::RuleForm;
use tracing::info;

use crate::{
    cli::{AddArgs, RemoveArgs},
    error::{Error, Result},
    store,
};

/// Drive a [`RuleForm`] from the command-line flags and persist the
/// confirmed rule.
///
/// `--recommended` seeds the range and priority for the kind; explicit
/// `--start`/`--end`/`--priority` flags override it field by field.
pub fn add(args: &AddArgs, db_path: Option<&Path>) -> Result<()> {
    let path = db_path.ok_or(Error::DbPathRequired)?;

    let mut form = RuleForm::new();
    form.set_kind(args.kind);
    form.set_value(args.value.as_str());
    form.apply_recommended(args.recommended);
    if let Some(start) = args.start {
        form.set_range_start(start);
    }
    if let Some(end) = args.end {
        form.set_range_end(end);
    }
    if let Some(priority) = args.priority {
        form.set_priority(priority);
    }
    let rule = form.validate_and_confirm()?;

    let mut db = store::open_for_edit(path)?;
    db.insert(&args.mime, rule);
    store::save(&db, path)?;
    info!(mime = %args.mime, "rule added");
    println!("added rule for {} ({} rules total)", args.mime, db.rule_count());
    Ok(())
}

/// Delete the rule at `--index` for `--mime` and persist the database.
pub fn remove(args: &RemoveArgs, db_path: Option<&Path>) -> Result<()> {
    let path = db_path.ok_or(Error::DbPathRequired)?;
    let mut db = store::open_for_edit(path)?;
    let rule = db.remove(&args.mime, args.index)?;
    store::save(&db, path)?;
    info!(mime = %args.mime, index = args.index, "rule removed");
    println!("removed {} rule '{}'", args.mime, rule.value);
    Ok(())
}
