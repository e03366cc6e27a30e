use crate::adapters::process::CommandRunner;
use crate::domain::AppError;
use crate::ports::Typechecker;

/// Runs the configured type-check command line.
#[derive(Debug, Clone)]
pub struct TypecheckCommandAdapter {
    runner: CommandRunner,
    command: Vec<String>,
}

impl TypecheckCommandAdapter {
    pub fn new(runner: CommandRunner, command: Vec<String>) -> Self {
        Self { runner, command }
    }
}

impl Typechecker for TypecheckCommandAdapter {
    fn typecheck(&self) -> Result<(), AppError> {
        let Some((program, args)) = self.command.split_first() else {
            return Err(AppError::MissingConfigKey(
                crate::domain::configuration::TYPECHECK_COMMAND_KEY.to_string(),
            ));
        };
        self.runner.run(program, args)?;
        Ok(())
    }
}
