use std::path::{Path, PathBuf};
use std::process::Command;

use crate::domain::AppError;

/// Runs external tools synchronously from the project root.
#[derive(Debug, Clone)]
pub struct CommandRunner {
    root: PathBuf,
}

impl CommandRunner {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Run `program args...` and return its stdout with trailing whitespace trimmed.
    pub fn run<S: AsRef<str>>(&self, program: &str, args: &[S]) -> Result<String, AppError> {
        let args: Vec<&str> = args.iter().map(|arg| arg.as_ref()).collect();
        let command_line = display_command(program, &args);

        let output = Command::new(program)
            .args(&args)
            .current_dir(&self.root)
            .output()
            .map_err(|e| AppError::CommandFailed {
                command: command_line.clone(),
                stderr: format!("Failed to execute {}: {}", program, e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim_end().to_string();
            return Err(AppError::CommandFailed { command: command_line, stderr });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim_end().to_string())
    }
}

fn display_command(program: &str, args: &[&str]) -> String {
    std::iter::once(program).chain(args.iter().copied()).collect::<Vec<_>>().join(" ")
}
