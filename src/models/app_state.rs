use std::sync::Arc;

use crate::models::RefreshPolicy;
use crate::parser::ParseSettings;
use crate::settings::Settings;
use crate::utils::HttpOptions;

/// Application state shared by the web handlers
#[derive(Debug, Clone)]
pub struct AppState {
    /// Global application settings
    pub config: Arc<Settings>,
}

impl AppState {
    /// Create a new AppState instance
    pub fn new(config: Settings) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Refresh policy configured as the default for requests that don't name one
    pub fn default_policy(&self) -> RefreshPolicy {
        self.config.refresh_policy()
    }

    pub fn parse_settings(&self) -> ParseSettings {
        ParseSettings {
            allowed_schemes: self.config.allowed_schemes.clone(),
        }
    }

    pub fn http_options(&self) -> HttpOptions {
        self.config.http_options()
    }
}
