//! Configuration management for spacedash

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{ConfigError, Result};

/// Application configuration
///
/// The SpaceX API needs no credentials, so the config file is optional:
/// when the default location has no file, defaults apply. An explicitly
/// requested path must exist.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// User preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    /// Default output format (table, json)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Seconds before a cached resource is considered stale
    #[serde(default = "default_cache_timeout_secs")]
    pub cache_timeout_secs: u64,

    /// Upcoming launches shown on the dashboard
    #[serde(default = "default_dashboard_limit")]
    pub upcoming_limit: usize,

    /// Past launches shown on the dashboard
    #[serde(default = "default_dashboard_limit")]
    pub past_limit: usize,
}

fn default_cache_timeout_secs() -> u64 {
    5 * 60
}

fn default_dashboard_limit() -> usize {
    5
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            format: None,
            cache_timeout_secs: default_cache_timeout_secs(),
            upcoming_limit: default_dashboard_limit(),
            past_limit: default_dashboard_limit(),
        }
    }
}

impl Config {
    /// Get the default config file path (~/.spacedash/config.yaml)
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".spacedash").join("config.yaml"))
    }

    /// Resolve the effective config file path from an optional override.
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration.
    ///
    /// A missing file at the default location yields defaults; an explicit
    /// `path` override that does not exist is an error.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        let resolved = Self::resolve_path(path)?;

        if !resolved.exists() {
            if path.is_some() {
                return Err(ConfigError::NotFound(resolved.display().to_string()).into());
            }
            return Ok(Self::default());
        }

        Self::load_from(&resolved)
    }

    fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(path, contents)?;

        Ok(())
    }

    /// The staleness window for cached resources
    pub fn cache_timeout(&self) -> Duration {
        Duration::from_secs(self.preferences.cache_timeout_secs)
    }
}
