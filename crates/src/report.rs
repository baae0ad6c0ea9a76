//! Observational record of what a pass changed.

use crate::label::LabeledString;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    /// No accelerator was requested, one was added.
    Added,
    /// The requested accelerator could not be kept.
    Removed,
    /// Requested and assigned are both set but differ.
    Changed,
}

/// Three append-only buffers, one line per affected label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    added: String,
    removed: String,
    changed: String,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.added.clear();
        self.removed.clear();
        self.changed.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }

    pub fn added(&self) -> &str {
        &self.added
    }

    pub fn removed(&self) -> &str {
        &self.removed
    }

    pub fn changed(&self) -> &str {
        &self.changed
    }

    /// Compares the label's rendered text with its authored text and records the
    /// difference. Returns the text to write back, or `None` when unchanged.
    pub fn check_change(&mut self, label: &LabeledString, programmers_mode: bool) -> Option<String> {
        let before = label.original();
        let after = label.accelerated(programmers_mode);
        if before == after {
            return None;
        }
        match classify(label) {
            Change::Removed => push_line(&mut self.removed, before),
            Change::Added => push_line(&mut self.added, &after),
            Change::Changed => push_line(&mut self.changed, &format!("{before} -> {after}")),
        }
        Some(after)
    }
}

pub fn classify(label: &LabeledString) -> Change {
    if label.assigned().is_none() {
        Change::Removed
    } else if label.requested().is_none() {
        Change::Added
    } else {
        Change::Changed
    }
}

fn push_line(buf: &mut String, line: &str) {
    // tab hints would break the one-line-per-entry layout
    buf.push_str(&line.replace('\t', "\\t"));
    buf.push('\n');
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sections = [
            ("Accelerators changed", &self.changed),
            ("Accelerators added", &self.added),
            ("Accelerators removed", &self.removed),
        ];
        let mut first = true;
        for (title, body) in sections {
            if body.is_empty() {
                continue;
            }
            if !first {
                writeln!(f)?;
            }
            first = false;
            writeln!(f, "{title}:")?;
            for line in body.lines() {
                writeln!(f, "  {line}")?;
            }
        }
        Ok(())
    }
}
