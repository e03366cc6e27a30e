pub mod azure_cli;
pub mod git_command;
pub mod github_command;
pub mod history_filesystem;
pub mod process;
pub mod system_clock;
pub mod typecheck_command;

pub use azure_cli::AzureCliAdapter;
pub use git_command::GitCommandAdapter;
pub use github_command::GitHubCommandAdapter;
pub use history_filesystem::FilesystemHistoryStore;
pub use process::CommandRunner;
pub use system_clock::SystemClock;
pub use typecheck_command::TypecheckCommandAdapter;
