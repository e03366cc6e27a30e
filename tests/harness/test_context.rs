use assert_cmd::Command;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::fake_tools::FakeTools;

pub const VALID_ENV: &str = "# Azure target\nAZURE_RESOURCE_GROUP=rg-site\nAZURE_APP_NAME=editor\n";

/// Testing harness providing an isolated project directory and fake tools on PATH.
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    tools: FakeTools,
}

impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("site");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        let tools = FakeTools::install(root.path());

        Self { root, work_dir, tools }
    }

    /// Project directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `swa-push` binary in the project directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("swa-push").expect("Failed to locate swa-push binary");
        let path = match env::var_os("PATH") {
            Some(existing) => {
                let mut paths = vec![self.tools.bin_dir.clone()];
                paths.extend(env::split_paths(&existing));
                env::join_paths(paths).expect("Failed to join PATH")
            }
            None => self.tools.bin_dir.clone().into_os_string(),
        };
        cmd.current_dir(&self.work_dir).env("PATH", path);
        for var in ["FAKE_NPM_FAIL", "FAKE_GIT_FAIL", "FAKE_GH_NO_RUNS", "FAKE_GH_CONCLUSION"] {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Write the project's `.env` settings file.
    pub fn write_env(&self, content: &str) {
        fs::write(self.work_dir.join(".env"), content).expect("Failed to write .env");
    }

    pub fn history_path(&self) -> PathBuf {
        self.work_dir.join(".deploy-history.json")
    }

    pub fn read_history(&self) -> serde_json::Value {
        let content = fs::read_to_string(self.history_path()).expect("history file should exist");
        serde_json::from_str(&content).expect("history file should be JSON")
    }

    /// Commands the fake tools received, one per line.
    pub fn tool_log(&self) -> String {
        self.tools.get_log()
    }
}
