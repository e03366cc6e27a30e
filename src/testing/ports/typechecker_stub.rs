use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::Typechecker;

#[derive(Clone, Default)]
pub struct FakeTypechecker {
    error: Arc<Mutex<Option<String>>>,
}

impl FakeTypechecker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_with(&self, stderr: &str) {
        *self.error.lock().unwrap() = Some(stderr.to_string());
    }
}

impl Typechecker for FakeTypechecker {
    fn typecheck(&self) -> Result<(), AppError> {
        match self.error.lock().unwrap().clone() {
            Some(stderr) => {
                Err(AppError::CommandFailed { command: "npm run typecheck".into(), stderr })
            }
            None => Ok(()),
        }
    }
}
