#![warn(missing_docs)]

//! Entry point for the `mimekit` binary.

mod cli;
mod edit;
mod error;
mod report;
mod sniff;
mod store;

use std::process;

use clap::Parser;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, registry};

use crate::{
    cli::{Cli, Commands},
    error::Result,
};

fn main() {
    if let Err(err) = run() {
        error!("{err}");
        eprintln!("error: {err}");
        process::exit(1);
    }
}

/// Parse CLI arguments, install logging, load the rule database, and
/// dispatch to the chosen subcommand — in that order.
fn run() -> Result<()> {
    let Cli { log, db, command } = Cli::parse();
    let env_filter = logging::env_filter_from_spec(&log.spec());
    registry()
        .with(env_filter)
        .with(fmt::layer().without_time())
        .try_init()
        .ok();

    let db_path = db.as_deref();
    match command {
        Commands::Sniff(args) => sniff::run(&args, db_path),
        Commands::List => report::list(db_path),
        Commands::Check => report::check(db_path),
        Commands::Add(args) => edit::add(&args, db_path),
        Commands::Remove(args) => edit::remove(&args, db_path),
    }
}
