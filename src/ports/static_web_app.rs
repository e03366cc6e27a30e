use crate::domain::AppError;

pub trait StaticWebAppPort {
    /// Default hostname of a deployed Static Web App.
    fn default_hostname(&self, app_name: &str, resource_group: &str) -> Result<String, AppError>;
}
