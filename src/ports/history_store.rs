use crate::domain::{AppError, DeploymentHistory};

/// Persistence for the deployment log.
pub trait HistoryStore {
    /// Load the log. A missing log is empty.
    fn load(&self) -> Result<DeploymentHistory, AppError>;

    /// Replace the persisted log.
    fn save(&self, history: &DeploymentHistory) -> Result<(), AppError>;
}
