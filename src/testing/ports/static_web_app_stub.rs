use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::StaticWebAppPort;

#[derive(Clone)]
pub struct FakeStaticWebApp {
    hostname: Arc<Mutex<String>>,
    lookups: Arc<Mutex<usize>>,
}

impl FakeStaticWebApp {
    pub fn new(hostname: &str) -> Self {
        Self { hostname: Arc::new(Mutex::new(hostname.to_string())), lookups: Arc::default() }
    }

    pub fn set_hostname(&self, hostname: &str) {
        *self.hostname.lock().unwrap() = hostname.to_string();
    }

    pub fn lookups(&self) -> usize {
        *self.lookups.lock().unwrap()
    }
}

impl StaticWebAppPort for FakeStaticWebApp {
    fn default_hostname(&self, _app_name: &str, _resource_group: &str) -> Result<String, AppError> {
        *self.lookups.lock().unwrap() += 1;
        Ok(self.hostname.lock().unwrap().clone())
    }
}
