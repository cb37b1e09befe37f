//! Configuration handling for token-sync
//!
//! Configuration is read from `~/.config/token-sync/config.toml` (or the
//! platform equivalent). `TOKEN_SYNC_CONFIG` points at a different file.
//! Command-line flags take precedence over anything set here.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::file::WriteOptions;

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "TOKEN_SYNC_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Output format for commands
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Default output format (text or json)
    pub default_format: OutputFormat,

    /// Spaces per indent level in written documents
    pub indent: usize,

    /// Copy the input document to `<document>.bak` before writing
    pub backup: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Text,
            indent: 2,
            backup: false,
        }
    }
}

impl Config {
    /// Loads configuration from `TOKEN_SYNC_CONFIG` or the default location
    ///
    /// A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Returns the config file that [`Config::load`] reads
    pub fn config_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
            return Some(PathBuf::from(path));
        }

        Self::global_config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Returns the global config directory
    pub fn global_config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "token-sync", "token-sync")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Loads configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.indent > 16 {
            return Err(ConfigError::Invalid(format!(
                "indent must be between 0 and 16, got {}",
                self.indent
            )));
        }
        Ok(())
    }

    /// Document write settings derived from this config
    pub fn write_options(&self) -> WriteOptions {
        WriteOptions {
            indent: self.indent,
        }
    }
}
