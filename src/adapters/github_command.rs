use crate::adapters::process::CommandRunner;
use crate::domain::{AppError, RunState, WorkflowRun};
use crate::ports::{GitHubPort, RunFilter};

const RUN_LIST_FIELDS: &str = "databaseId,status,conclusion,createdAt,url";
const RUN_VIEW_FIELDS: &str = "status,conclusion";

#[derive(Debug, Clone)]
pub struct GitHubCommandAdapter {
    runner: CommandRunner,
}

impl GitHubCommandAdapter {
    pub fn new(runner: CommandRunner) -> Self {
        Self { runner }
    }

    fn run_gh(&self, args: &[&str]) -> Result<String, AppError> {
        self.runner.run("gh", args)
    }
}

impl GitHubPort for GitHubCommandAdapter {
    fn latest_run(&self, filter: &RunFilter) -> Result<Option<WorkflowRun>, AppError> {
        let mut args = vec!["run", "list", "--limit", "1", "--json", RUN_LIST_FIELDS];
        if let Some(branch) = filter.branch.as_deref() {
            args.push("--branch");
            args.push(branch);
        }
        if let Some(workflow) = filter.workflow.as_deref() {
            args.push("--workflow");
            args.push(workflow);
        }

        let output = self.run_gh(&args)?;
        let runs: Vec<WorkflowRun> = serde_json::from_str(&output)
            .map_err(|e| AppError::parse_error("gh run list JSON", e))?;
        Ok(runs.into_iter().next())
    }

    fn run_state(&self, run_id: u64) -> Result<RunState, AppError> {
        let run_id_str = run_id.to_string();
        let output = self.run_gh(&["run", "view", &run_id_str, "--json", RUN_VIEW_FIELDS])?;
        serde_json::from_str(&output).map_err(|e| AppError::parse_error("gh run view JSON", e))
    }
}
