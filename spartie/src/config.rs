//! Configuration module for the spartie CLI.
//!
//! This module handles loading configuration settings from `spartie.toml`.

use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Result, SpartieError};
use crate::render::{Encoding, OutputFormat};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "spartie.toml";

/// Application configuration structure.
///
/// Every field has a default, so an empty file is a valid configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Colored log output.
    #[serde(default = "default_true")]
    pub color: bool,

    /// Token output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output-specific configuration options.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// How tokens are printed.
    #[serde(default)]
    pub format: OutputFormat,

    /// Encoding of source files.
    #[serde(default)]
    pub encoding: Encoding,
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            color: true,
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default locations.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. User configuration directory (`<config_dir>/spartie/`)
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        let cwd = std::env::current_dir()?;
        match Self::find_config_file(&cwd) {
            Some(path) => Self::load_from_path(&path),
            None => {
                debug!("no configuration file found, using defaults");
                Ok(Self::default())
            },
        }
    }

    /// Load configuration from a specific path.
    ///
    /// A missing file is an error here: the caller asked for it by name.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(SpartieError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            SpartieError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config = Self::parse(&content)?;
        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| SpartieError::Config(format!("Failed to parse configuration: {}", e)))
    }

    /// Check for config in the given working directory.
    fn check_current_dir_config(cwd: &Path) -> Option<PathBuf> {
        let path = cwd.join(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in the user configuration directory.
    fn check_user_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("spartie").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file(cwd: &Path) -> Option<PathBuf> {
        Self::check_current_dir_config(cwd).or_else(Self::check_user_config)
    }
}
