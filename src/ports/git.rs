use crate::domain::AppError;

pub trait GitPort {
    /// Push the current branch to its upstream.
    fn push(&self) -> Result<(), AppError>;

    /// Get the current branch name.
    fn current_branch(&self) -> Result<String, AppError>;
}
