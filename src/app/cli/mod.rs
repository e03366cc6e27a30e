//! CLI Adapter.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use crate::app::api::{self, DeployRequest, HistoryRequest};
use crate::app::commands::deploy::{DeployOptions, PollPolicy};
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "swa-push")]
#[command(version)]
#[command(
    about = "Typecheck, push, and follow a Static Web App deployment to its live URL",
    long_about = None
)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    deploy: DeployArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Typecheck, push, wait for the CI run, and print the site URL (default)
    #[clap(visible_alias = "d")]
    Deploy(DeployArgs),
    /// Show recent deployment durations
    #[clap(visible_alias = "h")]
    History {
        #[command(flatten)]
        paths: PathArgs,
    },
}

#[derive(Args, Clone)]
struct PathArgs {
    /// Project directory commands run in
    #[arg(long, default_value = ".")]
    root: PathBuf,
    /// Deployment history file [default: <root>/.deploy-history.json]
    #[arg(long)]
    history_file: Option<PathBuf>,
}

#[derive(Args, Clone)]
struct DeployArgs {
    #[command(flatten)]
    paths: PathArgs,
    /// Settings file with AZURE_RESOURCE_GROUP and AZURE_APP_NAME [default: <root>/.env]
    #[arg(long)]
    config: Option<PathBuf>,
    /// Seconds between CI status queries
    #[arg(long, default_value_t = 2)]
    interval: u64,
    /// Give up waiting for the run to complete after this many seconds
    #[arg(long)]
    timeout: Option<u64>,
}

impl DeployArgs {
    fn into_request(self) -> DeployRequest {
        DeployRequest {
            root: self.paths.root,
            config_file: self.config,
            history_file: self.paths.history_file,
            options: DeployOptions {
                poll: PollPolicy {
                    interval: Duration::from_secs(self.interval),
                    ..PollPolicy::default()
                },
                completion_timeout: self.timeout.map(Duration::from_secs),
            },
        }
    }
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Some(Commands::Deploy(args)) => api::deploy(args.into_request()).map(|_| ()),
        Some(Commands::History { paths }) => {
            api::history(HistoryRequest { root: paths.root, history_file: paths.history_file })
                .map(|_| ())
        }
        None => api::deploy(cli.deploy.into_request()).map(|_| ()),
    };

    if let Err(e) = result {
        report_error(&e);
        std::process::exit(1);
    }
}

fn report_error(error: &AppError) {
    match error {
        AppError::CommandFailed { command, stderr } => {
            eprintln!("✗ {}", command);
            if !stderr.is_empty() {
                eprintln!("{}", stderr);
            }
        }
        AppError::DeploymentFailed { .. } | AppError::CompletionTimeout { .. } => {
            eprintln!("✗ {}", error);
        }
        _ => eprintln!("Error: {}", error),
    }
}
