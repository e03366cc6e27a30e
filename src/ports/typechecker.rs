use crate::domain::AppError;

pub trait Typechecker {
    /// Run the project's type checker. Fails when it reports errors.
    fn typecheck(&self) -> Result<(), AppError>;
}
