mod clock;
mod git;
mod github;
mod history_store;
mod static_web_app;
mod typechecker;

pub use clock::Clock;
pub use git::GitPort;
pub use github::{GitHubPort, RunFilter};
pub use history_store::HistoryStore;
pub use static_web_app::StaticWebAppPort;
pub use typechecker::Typechecker;
