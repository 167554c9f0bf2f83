//! On-disk layout of the settings file, shared by the YAML and TOML readers

use serde::{Deserialize, Serialize};

use super::settings_struct::{
    default_auto_group_type, default_fetch_timeout, default_listen_address, default_listen_port,
    default_log_level, default_max_concur_threads, default_refresh_policy, default_user_agent,
};

/// Common settings section
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CommonSettings {
    /// Node source used when a request doesn't name one
    pub default_source: String,
    /// Template used when a request doesn't name one
    pub default_template: String,
    /// Token a request must carry to name local files; empty disables that
    pub api_access_token: String,
}

/// Merge behaviour section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeSettings {
    pub refresh_policy: String,
    pub primary_group: String,
    pub auto_group_type: String,
    pub allowed_schemes: Vec<String>,
}

impl Default for MergeSettings {
    fn default() -> Self {
        MergeSettings {
            refresh_policy: default_refresh_policy(),
            primary_group: String::new(),
            auto_group_type: default_auto_group_type(),
            allowed_schemes: Vec::new(),
        }
    }
}

/// Server settings section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub listen: String,
    pub port: u32,
    pub threads: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        ServerSettings {
            listen: default_listen_address(),
            port: default_listen_port(),
            threads: default_max_concur_threads(),
        }
    }
}

/// Advanced settings section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvancedSettings {
    pub log_level: String,
    /// Upstream proxy for fetches, `NONE` or empty to disable
    pub fetch_proxy: String,
    /// Fetch timeout in seconds
    pub fetch_timeout: u64,
    pub user_agent: String,
}

impl Default for AdvancedSettings {
    fn default() -> Self {
        AdvancedSettings {
            log_level: default_log_level(),
            fetch_proxy: String::new(),
            fetch_timeout: default_fetch_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

/// Whole settings file
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FileSettings {
    pub common: CommonSettings,
    pub merge: MergeSettings,
    pub server: ServerSettings,
    pub advanced: AdvancedSettings,
}
