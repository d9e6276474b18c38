//! Append command - add one entry to a decision log

use anyhow::{Context, Result};
use rivet_journal::{append, DecisionEntry};
use std::path::PathBuf;

/// Arguments for the append-decision command
pub struct AppendArgs {
    pub log: PathBuf,
    pub what: String,
    pub why: String,
    pub lesson: String,
    pub when: Option<String>,
}

/// Append a decision entry to the log file
pub fn run(args: AppendArgs) -> Result<()> {
    let mut entry = DecisionEntry::new(args.what, args.why).with_lesson(args.lesson);
    if let Some(when) = args.when {
        entry = entry.with_when(when);
    }

    append(&args.log, &entry)
        .with_context(|| format!("Failed to append to {}", args.log.display()))?;

    println!("Appended to {}", args.log.display());
    Ok(())
}
