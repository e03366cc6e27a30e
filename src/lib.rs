//! swa-push: typecheck, push, and follow a Static Web App deployment to its live URL.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;


pub use app::api::{DeployRequest, HistoryRequest, deploy, history};
pub use app::commands::deploy::{DeployOptions, DeployOutcome, PollPolicy};
pub use domain::{AppError, DeployConfig, DeploymentHistory, HistoryEntry};
