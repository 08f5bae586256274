//! Application configuration.
//!
//! T030: Load startup defaults from TOML
//!
//! The file is optional and only ever read. Session state is never written
//! back.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::scheduler::{DEFAULT_MOTIVATION_DELAY, DEFAULT_REMINDER_INTERVAL};

/// UI theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    /// Dark theme (default)
    #[default]
    Dark,
    /// Light theme
    Light,
}

impl std::fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemePreference::Dark => write!(f, "Dark"),
            ThemePreference::Light => write!(f, "Light"),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Application version
    pub version: String,
    /// Timer settings
    pub scheduler: SchedulerSettings,
    /// UI settings
    pub ui: UiSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            scheduler: SchedulerSettings::default(),
            ui: UiSettings::default(),
        }
    }
}

/// Timer-related settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerSettings {
    /// Delay before the motivational prompt, in seconds
    pub motivation_delay_secs: u64,
    /// Interval between reminder checks, in seconds
    pub reminder_interval_secs: u64,
}

impl Default for SchedulerSettings {
    fn default() -> Self {
        Self {
            motivation_delay_secs: DEFAULT_MOTIVATION_DELAY.as_secs(),
            reminder_interval_secs: DEFAULT_REMINDER_INTERVAL.as_secs(),
        }
    }
}

impl SchedulerSettings {
    pub fn motivation_delay(&self) -> Duration {
        Duration::from_secs(self.motivation_delay_secs)
    }

    /// Reminder interval; never shorter than one second.
    pub fn reminder_interval(&self) -> Duration {
        Duration::from_secs(self.reminder_interval_secs.max(1))
    }
}

/// UI-related settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Color theme
    pub theme: ThemePreference,
    /// Font scale multiplier
    pub font_scale: f32,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            theme: ThemePreference::Dark,
            font_scale: 1.0,
        }
    }
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "fittrack", "FitTrack")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Load application configuration from the default location.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(&get_config_path())
}

/// Load application configuration from `path`. A missing file yields defaults.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}
