//! Deployment settings parsed from a flat `KEY=VALUE` file.

use std::collections::BTreeMap;

use crate::domain::AppError;

pub const RESOURCE_GROUP_KEY: &str = "AZURE_RESOURCE_GROUP";
pub const APP_NAME_KEY: &str = "AZURE_APP_NAME";
pub const TYPECHECK_COMMAND_KEY: &str = "TYPECHECK_COMMAND";
pub const WORKFLOW_KEY: &str = "DEPLOY_WORKFLOW";
pub const BRANCH_KEY: &str = "DEPLOY_BRANCH";

pub const DEFAULT_TYPECHECK_COMMAND: &str = "npm run typecheck";
pub const DEFAULT_CONFIG_FILE: &str = ".env";

/// Immutable deployment settings, loaded once per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployConfig {
    resource_group: String,
    app_name: String,
    values: BTreeMap<String, String>,
}

impl DeployConfig {
    /// Build a config from raw settings, requiring the resource group and app name.
    pub fn from_values(values: BTreeMap<String, String>) -> Result<Self, AppError> {
        let resource_group = required(&values, RESOURCE_GROUP_KEY)?;
        let app_name = required(&values, APP_NAME_KEY)?;
        Ok(Self { resource_group, app_name, values })
    }

    pub fn resource_group(&self) -> &str {
        &self.resource_group
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Raw value lookup. Empty values read as absent.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str).filter(|v| !v.is_empty())
    }

    /// Program and arguments of the type checker.
    pub fn typecheck_command(&self) -> Vec<String> {
        self.get(TYPECHECK_COMMAND_KEY)
            .unwrap_or(DEFAULT_TYPECHECK_COMMAND)
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }

    pub fn workflow(&self) -> Option<&str> {
        self.get(WORKFLOW_KEY)
    }

    pub fn branch(&self) -> Option<&str> {
        self.get(BRANCH_KEY)
    }
}

fn required(values: &BTreeMap<String, String>, key: &str) -> Result<String, AppError> {
    values
        .get(key)
        .filter(|v| !v.is_empty())
        .cloned()
        .ok_or_else(|| AppError::MissingConfigKey(key.to_string()))
}

/// Parse `KEY=VALUE` lines. Blank lines, `#` comments, and lines without `=` are skipped.
pub fn parse_settings(content: &str) -> BTreeMap<String, String> {
    let mut values = BTreeMap::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        values.insert(key.to_string(), value.trim().to_string());
    }
    values
}
