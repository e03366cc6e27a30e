use std::sync::{Arc, Mutex};

use crate::domain::{AppError, DeploymentHistory};
use crate::ports::HistoryStore;

/// In-memory history store for testing.
#[derive(Clone, Default)]
pub struct MemoryHistoryStore {
    stored: Arc<Mutex<DeploymentHistory>>,
    saved: Arc<Mutex<Option<DeploymentHistory>>>,
    load_error: Arc<Mutex<Option<String>>>,
    loads: Arc<Mutex<usize>>,
}

impl MemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, history: DeploymentHistory) {
        *self.stored.lock().unwrap() = history;
    }

    /// Make every `load` fail as an unreadable history file would.
    pub fn fail_load(&self, details: &str) {
        *self.load_error.lock().unwrap() = Some(details.to_string());
    }

    /// Last saved history, if `save` was called.
    pub fn saved(&self) -> Option<DeploymentHistory> {
        self.saved.lock().unwrap().clone()
    }

    pub fn loads(&self) -> usize {
        *self.loads.lock().unwrap()
    }
}

impl HistoryStore for MemoryHistoryStore {
    fn load(&self) -> Result<DeploymentHistory, AppError> {
        *self.loads.lock().unwrap() += 1;
        if let Some(details) = self.load_error.lock().unwrap().clone() {
            return Err(AppError::parse_error("deployment history", details));
        }
        Ok(self.stored.lock().unwrap().clone())
    }

    fn save(&self, history: &DeploymentHistory) -> Result<(), AppError> {
        *self.stored.lock().unwrap() = history.clone();
        *self.saved.lock().unwrap() = Some(history.clone());
        Ok(())
    }
}
