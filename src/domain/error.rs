use std::io;

use thiserror::Error;

use crate::domain::history::format_duration;

/// Library-wide error type for swa-push operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Settings file not found at the expected location.
    #[error("Config file not found: {0}")]
    ConfigFileMissing(String),

    /// Required settings key absent or empty.
    #[error("Missing required config key '{0}'")]
    MissingConfigKey(String),

    /// External command exited non-zero or could not be spawned.
    #[error("Command failed: {command}")]
    CommandFailed { command: String, stderr: String },

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// Workflow run completed with a conclusion other than success.
    #[error("Failed ({conclusion}) after {}", elapsed(.duration_secs))]
    DeploymentFailed { conclusion: String, duration_secs: u64 },

    /// Completion poll exceeded the configured bound.
    #[error("Workflow run {run_id} did not complete within {}", elapsed(.waited_secs))]
    CompletionTimeout { run_id: u64, waited_secs: u64 },

    /// Local repository inspection failed.
    #[error("Git error running '{command}': {details}")]
    GitError { command: String, details: String },
}

fn elapsed(secs: &u64) -> String {
    format_duration(*secs)
}

impl AppError {
    pub fn parse_error<W: Into<String>, D: ToString>(what: W, details: D) -> Self {
        AppError::ParseError { what: what.into(), details: details.to_string() }
    }

}
