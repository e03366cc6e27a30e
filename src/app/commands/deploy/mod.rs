//! Deploy command: typecheck, push, follow the CI run, report the live URL.

mod completion;
mod disambiguate;

use std::time::Duration;

use url::Url;

use crate::app::AppContext;
use crate::app::commands::history::print_report;
use crate::domain::{
    AppError, DeployConfig, DeploymentHistory, HistoryEntry, WorkflowRun, format_duration,
};
use crate::ports::RunFilter;

pub use completion::{Completion, wait_for_completion};
pub use disambiguate::wait_for_new_run;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);
pub const DEFAULT_START_ATTEMPTS: u32 = 30;

/// Pacing for both polling loops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    /// Pause between queries.
    pub interval: Duration,
    /// Run-list queries made while waiting for the pushed run to appear.
    pub max_start_attempts: u32,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self { interval: DEFAULT_POLL_INTERVAL, max_start_attempts: DEFAULT_START_ATTEMPTS }
    }
}

/// Options for the deploy command.
#[derive(Debug, Clone, Default)]
pub struct DeployOptions {
    pub poll: PollPolicy,
    /// Upper bound for the completion poll. `None` waits indefinitely.
    pub completion_timeout: Option<Duration>,
}

/// Result of a successful deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployOutcome {
    /// Run that was followed, if any run was observable.
    pub run_id: Option<u64>,
    /// Recorded duration of the followed run.
    pub duration_secs: Option<u64>,
    pub url: String,
}

/// Execute the deployment pipeline.
pub fn execute(
    ctx: &AppContext,
    config: &DeployConfig,
    options: &DeployOptions,
) -> Result<DeployOutcome, AppError> {
    println!("→ Typechecking...");
    ctx.typechecker().typecheck()?;
    println!("✓ Types OK");

    let history = ctx.history().load()?;
    let filter = run_filter(ctx, config);
    let previous = ctx.github().latest_run(&filter)?;

    println!("→ Pushing to GitHub...");
    ctx.git().push()?;
    println!("✓ Pushed");

    println!("→ Waiting for deployment...");
    let previous_id = previous.as_ref().map(|run| run.id);
    let run = wait_for_new_run(ctx.github(), ctx.clock(), &filter, previous_id, &options.poll)?;

    let duration_secs = match &run {
        Some(run) => Some(follow_run(ctx, history, run, options)?),
        None => {
            eprintln!("⚠ No workflow run found");
            None
        }
    };

    let url = site_url(ctx, config)?;
    println!("\n→ {}", url);

    Ok(DeployOutcome { run_id: run.map(|r| r.id), duration_secs, url })
}

/// Branch from settings, else the checkout's current branch, else unfiltered.
fn run_filter(ctx: &AppContext, config: &DeployConfig) -> RunFilter {
    let branch = match config.branch() {
        Some(branch) => Some(branch.to_string()),
        None => ctx.git().current_branch().ok(),
    };
    RunFilter { branch, workflow: config.workflow().map(str::to_string) }
}

/// Poll the run to completion and record its outcome. Returns the recorded duration.
fn follow_run(
    ctx: &AppContext,
    mut history: DeploymentHistory,
    run: &WorkflowRun,
    options: &DeployOptions,
) -> Result<u64, AppError> {
    print_report(&history);

    if let Some(url) = run.url.as_deref() {
        println!("  Run {}: {}", run.id, url);
    }

    let completion = wait_for_completion(
        ctx.github(),
        ctx.clock(),
        run.id,
        options.poll.interval,
        options.completion_timeout,
    )?;

    let duration_secs = completion.elapsed.as_secs();
    let success = completion.conclusion.is_success();
    history.record(HistoryEntry::new(ctx.clock().timestamp(), duration_secs, success));
    ctx.history().save(&history)?;

    if !success {
        return Err(AppError::DeploymentFailed {
            conclusion: completion.conclusion.to_string(),
            duration_secs,
        });
    }

    println!("✓ Deployed in {}", format_duration(duration_secs));
    Ok(duration_secs)
}

fn site_url(ctx: &AppContext, config: &DeployConfig) -> Result<String, AppError> {
    let raw = ctx.static_web_app().default_hostname(config.app_name(), config.resource_group())?;
    let hostname = raw.trim();

    let invalid = |details: String| AppError::parse_error("Static Web App hostname", details);
    let url = Url::parse(&format!("https://{}", hostname))
        .map_err(|e| invalid(format!("'{}': {}", hostname, e)))?;

    let bare_host = url.path() == "/"
        && url.query().is_none()
        && url.fragment().is_none()
        && url.username().is_empty()
        && url.port().is_none();
    if url.host_str().is_none() || !bare_host {
        return Err(invalid(format!("'{}' is not a bare hostname", hostname)));
    }
    Ok(format!("https://{}", hostname))
}
