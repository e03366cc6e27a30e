use crate::adapters::process::CommandRunner;
use crate::domain::AppError;
use crate::ports::StaticWebAppPort;

/// Static Web App queries through the Azure CLI.
#[derive(Debug, Clone)]
pub struct AzureCliAdapter {
    runner: CommandRunner,
}

impl AzureCliAdapter {
    pub fn new(runner: CommandRunner) -> Self {
        Self { runner }
    }
}

impl StaticWebAppPort for AzureCliAdapter {
    fn default_hostname(&self, app_name: &str, resource_group: &str) -> Result<String, AppError> {
        self.runner.run(
            "az",
            &[
                "staticwebapp",
                "show",
                "--name",
                app_name,
                "--resource-group",
                resource_group,
                "--query",
                "defaultHostname",
                "-o",
                "tsv",
            ],
        )
    }
}
