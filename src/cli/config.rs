//! Global configuration for the CLI
//!
//! Stored as TOML in the platform config directory
//! (`~/.config/taskfile-cli/config.toml` on Linux). `TASKFILE_CLI_CONFIG`
//! points at a different file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::output::OutputFormat;
use crate::read::DEFAULT_ENTRYPOINT;

/// Environment variable overriding the config file location
pub const CONFIG_PATH_ENV: &str = "TASKFILE_CLI_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// User configuration; command-line flags take precedence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// Entrypoint file name searched for
    pub entrypoint: String,

    /// Default output format (text or json)
    pub default_format: OutputFormat,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            entrypoint: DEFAULT_ENTRYPOINT.to_string(),
            default_format: OutputFormat::Text,
        }
    }
}

impl GlobalConfig {
    /// Returns the config file location, if one can be determined
    pub fn path() -> Option<PathBuf> {
        if let Ok(explicit) = std::env::var(CONFIG_PATH_ENV) {
            return Some(PathBuf::from(explicit));
        }
        ProjectDirs::from("dev", "taskfile", "taskfile-cli")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Loads the config from its default location
    pub fn load() -> Result<Self> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Loads the config from `path`; a missing file means defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }
}
