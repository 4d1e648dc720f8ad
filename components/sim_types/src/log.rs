//! Bounded, most-recent-first event log.
//!
//! The log is the simulator's narration surface: every transition appends a
//! human-readable entry. Retention is bounded; nothing in the simulator
//! depends on old entries staying around.

use std::collections::VecDeque;

use chrono::{DateTime, Local};

/// Maximum number of entries the log retains.
pub const LOG_CAPACITY: usize = 50;

/// Severity of a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Neutral narration
    Info,
    /// A user- or trigger-initiated action
    Action,
    /// An error or warning condition
    Error,
}

/// A single narration entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Wall-clock time the entry was recorded
    pub timestamp: DateTime<Local>,
    /// Human-readable message
    pub message: String,
    /// Entry severity
    pub severity: Severity,
}

/// Append-only event log, iterated most-recent-first.
///
/// # Examples
///
/// ```
/// use sim_types::{EventLog, Severity};
///
/// let mut log = EventLog::new();
/// log.push(Severity::Info, "first");
/// log.push(Severity::Action, "second");
///
/// let messages: Vec<_> = log.entries().map(|e| e.message.as_str()).collect();
/// assert_eq!(messages, ["second", "first"]);
/// ```
#[derive(Debug, Default)]
pub struct EventLog {
    entries: VecDeque<LogEntry>,
}

impl EventLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(LOG_CAPACITY),
        }
    }

    /// Records an entry, evicting the oldest once capacity is reached.
    pub fn push(&mut self, severity: Severity, message: impl Into<String>) {
        if self.entries.len() == LOG_CAPACITY {
            self.entries.pop_back();
        }
        self.entries.push_front(LogEntry {
            timestamp: Local::now(),
            message: message.into(),
            severity,
        });
    }

    /// Iterates entries, most recent first.
    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// Number of retained entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing has been logged yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
