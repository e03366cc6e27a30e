//! Bounded log of past deployment durations and outcomes.

use serde::{Deserialize, Serialize};

/// Number of entries kept in the persisted log.
pub const MAX_HISTORY_ENTRIES: usize = 10;

/// Number of entries shown by the history report.
pub const REPORTED_ENTRIES: usize = 5;

/// One recorded deployment attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Local time the run finished, `%Y-%m-%dT%H:%M:%S`.
    pub timestamp: String,
    /// Whole seconds spent waiting for the run to complete.
    pub duration: u64,
    pub success: bool,
}

impl HistoryEntry {
    pub fn new(timestamp: impl Into<String>, duration: u64, success: bool) -> Self {
        Self { timestamp: timestamp.into(), duration, success }
    }
}

/// Deployment log ordered oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeploymentHistory {
    entries: Vec<HistoryEntry>,
}

impl DeploymentHistory {
    /// Wrap loaded entries, keeping only the newest `MAX_HISTORY_ENTRIES`.
    pub fn new(entries: Vec<HistoryEntry>) -> Self {
        let mut history = Self { entries };
        history.truncate();
        history
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append an entry and drop the oldest ones beyond the cap.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
        self.truncate();
    }

    /// The last `count` entries, oldest first.
    pub fn recent(&self, count: usize) -> &[HistoryEntry] {
        let start = self.entries.len().saturating_sub(count);
        &self.entries[start..]
    }

    /// Mean duration of successful entries, rounded to the nearest second.
    pub fn average_success_secs(&self) -> Option<u64> {
        let durations: Vec<u64> =
            self.entries.iter().filter(|e| e.success).map(|e| e.duration).collect();
        if durations.is_empty() {
            return None;
        }
        let total: u64 = durations.iter().sum();
        Some((total as f64 / durations.len() as f64).round() as u64)
    }

    fn truncate(&mut self) {
        if self.entries.len() > MAX_HISTORY_ENTRIES {
            let excess = self.entries.len() - MAX_HISTORY_ENTRIES;
            self.entries.drain(..excess);
        }
    }
}

/// Render seconds as `Nm Ss`.
pub fn format_duration(secs: u64) -> String {
    format!("{}m {}s", secs / 60, secs % 60)
}
