use std::path::Path;
use std::time::Duration;

use log::{debug, warn};
use thiserror::Error;

use super::file_settings::FileSettings;
use crate::models::RefreshPolicy;
use crate::utils::http::{parse_proxy, HttpOptions, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};

/// Failures while loading a settings file
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid YAML settings: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid TOML settings: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unknown refresh policy in settings: {0}")]
    InvalidPolicy(String),
}

/// Settings structure to hold global configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub pref_path: String,

    // Defaults for requests
    pub default_source: String,
    pub default_template: String,
    pub api_access_token: String,

    // Merge behaviour
    pub refresh_policy: String,
    pub primary_group: String,
    pub auto_group_type: String,
    pub allowed_schemes: Vec<String>,

    // Server
    pub listen_address: String,
    pub listen_port: u32,
    pub max_concur_threads: usize,

    // Fetching and logging
    pub log_level: String,
    pub fetch_proxy: String,
    pub fetch_timeout: u64,
    pub user_agent: String,
}

// Default value functions for serde
pub fn default_listen_address() -> String {
    "127.0.0.1".to_string()
}

pub fn default_listen_port() -> u32 {
    25500
}

pub fn default_max_concur_threads() -> usize {
    4
}

pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_refresh_policy() -> String {
    "content-aware".to_string()
}

pub fn default_auto_group_type() -> String {
    "url-test".to_string()
}

pub fn default_fetch_timeout() -> u64 {
    DEFAULT_TIMEOUT
}

pub fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Settings::from(FileSettings::default())
    }
}

impl From<FileSettings> for Settings {
    fn from(file: FileSettings) -> Self {
        Settings {
            pref_path: String::new(),
            default_source: file.common.default_source,
            default_template: file.common.default_template,
            api_access_token: file.common.api_access_token,
            refresh_policy: file.merge.refresh_policy,
            primary_group: file.merge.primary_group,
            auto_group_type: file.merge.auto_group_type,
            allowed_schemes: file.merge.allowed_schemes,
            listen_address: file.server.listen,
            listen_port: file.server.port,
            max_concur_threads: file.server.threads,
            log_level: file.advanced.log_level,
            fetch_proxy: file.advanced.fetch_proxy,
            fetch_timeout: file.advanced.fetch_timeout,
            user_agent: file.advanced.user_agent,
        }
    }
}

impl Settings {
    /// Create a new settings instance with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse settings from YAML or TOML text
    ///
    /// Content with a `common:` section is read as YAML, anything else as
    /// TOML with a YAML fallback.
    pub fn load_from_content(content: &str) -> Result<Self, SettingsError> {
        let file: FileSettings = if content.contains("common:") {
            serde_yaml::from_str(content)?
        } else {
            match toml::from_str(content) {
                Ok(file) => file,
                Err(toml_err) => {
                    debug!("Settings are not TOML, trying YAML: {}", toml_err);
                    serde_yaml::from_str::<Option<FileSettings>>(content)
                        .map_err(|_| SettingsError::Toml(toml_err))?
                        .unwrap_or_default()
                }
            }
        };

        let mut settings = Settings::from(file);
        if RefreshPolicy::parse(&settings.refresh_policy, None, &settings.auto_group_type).is_none()
        {
            return Err(SettingsError::InvalidPolicy(settings.refresh_policy));
        }
        if settings.listen_address.trim().is_empty() {
            settings.listen_address = default_listen_address();
        }
        Ok(settings)
    }

    /// Load settings from a file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let mut settings = Settings::load_from_content(&content)?;
        settings.pref_path = path.display().to_string();
        Ok(settings)
    }

    /// The configured default refresh policy
    pub fn refresh_policy(&self) -> RefreshPolicy {
        RefreshPolicy::parse(
            &self.refresh_policy,
            Some(self.primary_group.as_str()),
            &self.auto_group_type,
        )
        .unwrap_or_else(|| {
            warn!(
                "Unknown refresh policy '{}', using content-aware",
                self.refresh_policy
            );
            RefreshPolicy::default()
        })
    }

    /// Whether `token` grants access to local files; never with no token set
    pub fn token_matches(&self, token: Option<&str>) -> bool {
        !self.api_access_token.is_empty() && token == Some(self.api_access_token.as_str())
    }

    pub fn http_options(&self) -> HttpOptions {
        HttpOptions {
            proxy: parse_proxy(&self.fetch_proxy),
            timeout: Duration::from_secs(self.fetch_timeout),
            user_agent: self.user_agent.clone(),
        }
    }

    /// `address:port` to bind the server to
    pub fn listen_target(&self) -> String {
        let address = self.listen_address.trim();
        if address.is_empty() {
            format!("{}:{}", default_listen_address(), self.listen_port)
        } else if address.contains(':') {
            address.to_string()
        } else {
            format!("{}:{}", address, self.listen_port)
        }
    }
}
