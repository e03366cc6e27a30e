//! CI workflow run descriptors as reported by the GitHub CLI.

use std::fmt;

use serde::{Deserialize, Deserializer};

/// Lifecycle status of a workflow run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum RunStatus {
    Queued,
    InProgress,
    Completed,
    /// Any other provider status (`waiting`, `requested`, `pending`, ...).
    Other(String),
}

impl RunStatus {
    pub fn as_str(&self) -> &str {
        match self {
            RunStatus::Queued => "queued",
            RunStatus::InProgress => "in_progress",
            RunStatus::Completed => "completed",
            RunStatus::Other(status) => status,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, RunStatus::Completed)
    }
}

impl From<String> for RunStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "queued" => RunStatus::Queued,
            "in_progress" => RunStatus::InProgress,
            "completed" => RunStatus::Completed,
            _ => RunStatus::Other(value),
        }
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terminal outcome of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conclusion {
    Success,
    Failure,
    Cancelled,
    Other(String),
}

impl Conclusion {
    pub fn as_str(&self) -> &str {
        match self {
            Conclusion::Success => "success",
            Conclusion::Failure => "failure",
            Conclusion::Cancelled => "cancelled",
            Conclusion::Other(conclusion) => conclusion,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Conclusion::Success)
    }
}

impl From<String> for Conclusion {
    fn from(value: String) -> Self {
        match value.as_str() {
            "success" => Conclusion::Success,
            "failure" => Conclusion::Failure,
            "cancelled" => Conclusion::Cancelled,
            _ => Conclusion::Other(value),
        }
    }
}

impl fmt::Display for Conclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `gh` reports an unfinished run's conclusion as `""` (or omits it).
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<Conclusion>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.is_empty()).map(Conclusion::from))
}

/// Entry of `gh run list --json databaseId,status,conclusion,createdAt,url`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorkflowRun {
    #[serde(rename = "databaseId")]
    pub id: u64,
    pub status: RunStatus,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub conclusion: Option<Conclusion>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Output of `gh run view <id> --json status,conclusion`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RunState {
    pub status: RunStatus,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub conclusion: Option<Conclusion>,
}

impl RunState {
    pub fn new(status: RunStatus, conclusion: Option<Conclusion>) -> Self {
        Self { status, conclusion }
    }
}
