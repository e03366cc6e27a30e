//! Deployment history report.

use crate::domain::history::REPORTED_ENTRIES;
use crate::domain::{AppError, DeploymentHistory, format_duration};
use crate::ports::HistoryStore;

/// Load the log and print the report.
pub fn execute(store: &dyn HistoryStore) -> Result<DeploymentHistory, AppError> {
    let history = store.load()?;
    if history.is_empty() {
        println!("No deployments recorded yet");
    } else {
        print_report(&history);
    }
    Ok(history)
}

pub fn print_report(history: &DeploymentHistory) {
    for line in render_report(history) {
        println!("{}", line);
    }
}

/// Recent entries (oldest of them first) followed by the mean successful duration.
pub fn render_report(history: &DeploymentHistory) -> Vec<String> {
    if history.is_empty() {
        return Vec::new();
    }

    let mut lines = vec!["Recent deployments:".to_string()];
    for entry in history.recent(REPORTED_ENTRIES) {
        let glyph = if entry.success { "✓" } else { "✗" };
        lines.push(format!("  {} {}: {}", glyph, entry.timestamp, format_duration(entry.duration)));
    }
    if let Some(average) = history.average_success_secs() {
        lines.push(format!("  Average: {}", format_duration(average)));
    }
    lines
}
