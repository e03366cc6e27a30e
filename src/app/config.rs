//! Deployment settings loading.

use std::fs;
use std::path::Path;

use crate::domain::configuration::parse_settings;
use crate::domain::{AppError, DeployConfig};

/// Load and validate the `KEY=VALUE` settings file.
pub fn load_config(path: &Path) -> Result<DeployConfig, AppError> {
    if !path.is_file() {
        return Err(AppError::ConfigFileMissing(path.display().to_string()));
    }

    let content = fs::read_to_string(path)?;
    DeployConfig::from_values(parse_settings(&content))
}
