//! Waiting for the run triggered by the push to show up in the run list.

use crate::app::commands::deploy::PollPolicy;
use crate::domain::{AppError, WorkflowRun};
use crate::ports::{Clock, GitHubPort, RunFilter};

/// Poll the run list until its newest run differs from `previous_id`.
///
/// After `policy.max_start_attempts` queries without a new id, the last observed
/// run (possibly the stale one, possibly none) is returned instead of failing.
pub fn wait_for_new_run(
    github: &dyn GitHubPort,
    clock: &dyn Clock,
    filter: &RunFilter,
    previous_id: Option<u64>,
    policy: &PollPolicy,
) -> Result<Option<WorkflowRun>, AppError> {
    let mut latest = None;

    for _ in 0..policy.max_start_attempts {
        latest = github.latest_run(filter)?;
        if let Some(run) = latest.as_ref().filter(|run| Some(run.id) != previous_id) {
            match run.created_at.as_deref() {
                Some(created_at) => println!("✓ Run {} started at {}", run.id, created_at),
                None => println!("✓ Run {} started", run.id),
            }
            return Ok(latest);
        }
        clock.sleep(policy.interval);
    }

    if let Some(run) = &latest {
        eprintln!(
            "⚠ No new workflow run after {} checks; following run {}",
            policy.max_start_attempts, run.id
        );
    }
    Ok(latest)
}
