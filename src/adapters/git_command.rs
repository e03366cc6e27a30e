use crate::adapters::process::CommandRunner;
use crate::domain::AppError;
use crate::ports::GitPort;
use git2::Repository;

#[derive(Debug, Clone)]
pub struct GitCommandAdapter {
    runner: CommandRunner,
}

impl GitCommandAdapter {
    pub fn new(runner: CommandRunner) -> Self {
        Self { runner }
    }

    fn repo(&self) -> Result<Repository, AppError> {
        Repository::discover(self.runner.root()).map_err(|e| AppError::GitError {
            command: "git2::Repository::discover".to_string(),
            details: e.to_string(),
        })
    }
}

impl GitPort for GitCommandAdapter {
    fn push(&self) -> Result<(), AppError> {
        self.runner.run("git", &["push"])?;
        Ok(())
    }

    fn current_branch(&self) -> Result<String, AppError> {
        let repo = self.repo()?;

        match repo.head() {
            Ok(head) => {
                if !head.is_branch() {
                    return Err(AppError::GitError {
                        command: "current_branch".to_string(),
                        details: "HEAD is detached".to_string(),
                    });
                }
                let shorthand = head.shorthand().ok_or_else(|| AppError::GitError {
                    command: "git2::Reference::shorthand".to_string(),
                    details: "HEAD has no shorthand".to_string(),
                })?;
                Ok(shorthand.to_string())
            }
            Err(e) if e.code() == git2::ErrorCode::UnbornBranch => {
                let head_ref = repo.find_reference("HEAD").map_err(|e| AppError::GitError {
                    command: "git2::Repository::find_reference(HEAD)".to_string(),
                    details: e.to_string(),
                })?;

                match head_ref.symbolic_target() {
                    Some(target) => {
                        Ok(target.strip_prefix("refs/heads/").unwrap_or(target).to_string())
                    }
                    None => Err(AppError::GitError {
                        command: "current_branch".to_string(),
                        details: "HEAD is detached and unborn".to_string(),
                    }),
                }
            }
            Err(e) => Err(AppError::GitError {
                command: "git2::Repository::head".to_string(),
                details: e.to_string(),
            }),
        }
    }
}
