//! Decision Journal
//!
//! Append-only, human-readable record of engineering decisions with
//! rationale and optional lessons learned. Entries are YAML-list-shaped
//! text blocks, one per append, intended to be read and diffed by
//! humans rather than parsed back.
//!
//! Field values are written verbatim: a `:` or newline inside `what`,
//! `why`, or `lesson` will break the line-oriented format. Callers own
//! that constraint.
//!
//! Concurrent appends to the same file are not coordinated; this is a
//! local developer-logging tool.

use chrono::{SecondsFormat, Utc};
use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use thiserror::Error;

/// Journal errors
#[derive(Error, Debug)]
pub enum JournalError {
    #[error("Failed to write decision log: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for journal operations
pub type JournalResult<T> = Result<T, JournalError>;

/// One decision record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionEntry {
    /// ISO-8601 UTC timestamp, second precision, trailing `Z`
    pub when: String,
    /// What was decided
    pub what: String,
    /// Why it was decided
    pub why: String,
    /// Lesson learned, possibly empty (still rendered)
    pub lesson: String,
}

impl DecisionEntry {
    /// Create an entry stamped with the current UTC time
    pub fn new(what: impl Into<String>, why: impl Into<String>) -> Self {
        Self {
            when: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            what: what.into(),
            why: why.into(),
            lesson: String::new(),
        }
    }

    /// Replace the timestamp with a caller-supplied one
    pub fn with_when(mut self, when: impl Into<String>) -> Self {
        self.when = when.into();
        self
    }

    /// Set the lesson learned
    pub fn with_lesson(mut self, lesson: impl Into<String>) -> Self {
        self.lesson = lesson.into();
        self
    }
}

impl fmt::Display for DecisionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- when: {}", self.when)?;
        writeln!(f, "  what: {}", self.what)?;
        writeln!(f, "  why: {}", self.why)?;
        writeln!(f, "  lesson: {}", self.lesson)
    }
}

/// Append one entry to the log at `path`
///
/// Creates parent directories and the file itself if absent. After
/// writing, re-reads the file and appends a final newline if the
/// content does not end with one; this normalizes pre-existing files
/// that were left without a trailing newline.
pub fn append(path: &Path, entry: &DecisionEntry) -> JournalResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        write!(file, "{entry}")?;
    }

    let content = fs::read_to_string(path)?;
    if !content.ends_with('\n') {
        let mut file = OpenOptions::new().append(true).open(path)?;
        writeln!(file)?;
    }

    Ok(())
}
