//! Settings module
//!
//! This module contains the configuration settings and their file loaders

pub mod file_settings;
pub mod settings_struct;

pub use file_settings::FileSettings;
pub use settings_struct::{Settings, SettingsError};
