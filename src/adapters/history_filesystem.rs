use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::domain::{AppError, DeploymentHistory, HistoryEntry};
use crate::ports::HistoryStore;

pub const DEFAULT_HISTORY_FILE: &str = ".deploy-history.json";

/// Deployment log stored as a JSON array on disk.
#[derive(Debug, Clone)]
pub struct FilesystemHistoryStore {
    path: PathBuf,
}

impl FilesystemHistoryStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl HistoryStore for FilesystemHistoryStore {
    fn load(&self) -> Result<DeploymentHistory, AppError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(DeploymentHistory::default()),
            Err(e) => return Err(e.into()),
        };
        if content.trim().is_empty() {
            return Ok(DeploymentHistory::default());
        }

        let entries: Vec<HistoryEntry> = serde_json::from_str(&content).map_err(|e| {
            AppError::parse_error(format!("history file {}", self.path.display()), e)
        })?;
        Ok(DeploymentHistory::new(entries))
    }

    fn save(&self, history: &DeploymentHistory) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(history)
            .map_err(|e| AppError::parse_error("deployment history", e))?;
        let temp = self.temp_path();
        fs::write(&temp, json + "\n")?;
        fs::rename(&temp, &self.path)?;
        Ok(())
    }
}
