pub mod configuration;
pub mod error;
pub mod history;
pub mod workflow_run;

pub use configuration::DeployConfig;
pub use error::AppError;
pub use history::{DeploymentHistory, HistoryEntry, MAX_HISTORY_ENTRIES, format_duration};
pub use workflow_run::{Conclusion, RunState, RunStatus, WorkflowRun};
