use crate::domain::{AppError, RunState, WorkflowRun};

/// Narrows run listing to the deployment workflow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunFilter {
    pub branch: Option<String>,
    pub workflow: Option<String>,
}

pub trait GitHubPort {
    /// The most recently created workflow run matching `filter`, if any.
    fn latest_run(&self, filter: &RunFilter) -> Result<Option<WorkflowRun>, AppError>;

    /// Current status and conclusion of a run.
    fn run_state(&self, run_id: u64) -> Result<RunState, AppError>;
}
