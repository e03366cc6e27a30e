//! Library entry points wiring the command-line adapters into the commands.

use std::path::{Path, PathBuf};

use crate::adapters::history_filesystem::DEFAULT_HISTORY_FILE;
use crate::adapters::{
    AzureCliAdapter, CommandRunner, FilesystemHistoryStore, GitCommandAdapter,
    GitHubCommandAdapter, SystemClock, TypecheckCommandAdapter,
};
use crate::app::AppContext;
use crate::app::commands::deploy::{self, DeployOptions, DeployOutcome};
use crate::app::commands::history;
use crate::app::config::load_config;
use crate::domain::configuration::DEFAULT_CONFIG_FILE;
use crate::domain::{AppError, DeploymentHistory};

/// Inputs for a deployment.
#[derive(Debug, Clone)]
pub struct DeployRequest {
    /// Project directory every external command runs in.
    pub root: PathBuf,
    /// Settings file; defaults to `<root>/.env`.
    pub config_file: Option<PathBuf>,
    /// History log; defaults to `<root>/.deploy-history.json`.
    pub history_file: Option<PathBuf>,
    pub options: DeployOptions,
}

/// Inputs for the history report.
#[derive(Debug, Clone)]
pub struct HistoryRequest {
    pub root: PathBuf,
    pub history_file: Option<PathBuf>,
}

/// Typecheck, push, follow the CI run, and return the live URL.
///
/// Settings are validated before any external command runs.
pub fn deploy(request: DeployRequest) -> Result<DeployOutcome, AppError> {
    let config_path = resolve(&request.root, request.config_file, DEFAULT_CONFIG_FILE);
    let config = load_config(&config_path)?;

    let runner = CommandRunner::new(request.root.clone());
    let history_path = resolve(&request.root, request.history_file, DEFAULT_HISTORY_FILE);
    let ctx = AppContext::new(
        Box::new(TypecheckCommandAdapter::new(runner.clone(), config.typecheck_command())),
        Box::new(GitCommandAdapter::new(runner.clone())),
        Box::new(GitHubCommandAdapter::new(runner.clone())),
        Box::new(AzureCliAdapter::new(runner)),
        Box::new(FilesystemHistoryStore::new(history_path)),
        Box::new(SystemClock::new()),
    );

    deploy::execute(&ctx, &config, &request.options)
}

/// Print the recorded deployment history.
pub fn history(request: HistoryRequest) -> Result<DeploymentHistory, AppError> {
    let path = resolve(&request.root, request.history_file, DEFAULT_HISTORY_FILE);
    history::execute(&FilesystemHistoryStore::new(path))
}

fn resolve(root: &Path, explicit: Option<PathBuf>, default_name: &str) -> PathBuf {
    explicit.unwrap_or_else(|| root.join(default_name))
}
