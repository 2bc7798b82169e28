//! Configuration management for registrar.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default data directory name.
const DATA_DIR_NAME: &str = "registrar";

/// Default database file name.
const DATABASE_FILE_NAME: &str = "registrar.db";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `REGISTRAR_`)
/// 2. TOML config file at `~/.config/registrar/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Storage configuration.
    pub storage: StorageConfig,
    /// Page configuration.
    pub page: PageConfig,
    /// Output configuration.
    pub output: OutputConfig,
}

/// Storage-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path to the database file.
    /// Defaults to `~/.local/share/registrar/registrar.db`
    pub database_path: Option<PathBuf>,
}

/// Text shown around the registrations table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Page heading and HTML title.
    pub title: String,
    /// Message shown when there are no records.
    pub empty_message: String,
}

/// Output-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Format used by `list` when none is given.
    pub default_format: ListFormat,
}

/// How `list` prints records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListFormat {
    /// One record per line.
    Plain,
    /// Aligned table.
    #[default]
    Table,
    /// JSON array in the stored format.
    Json,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "IEI Student Chapter".to_string(),
            empty_message: "No students registered yet.".to_string(),
        }
    }
}

impl Config {
    /// Load configuration, reading the TOML file at `config_path` or at
    /// [`Config::default_config_path`] when none is given.
    ///
    /// Environment variables use `__` between section and field, e.g.
    /// `REGISTRAR_PAGE__EMPTY_MESSAGE`.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed("REGISTRAR_").split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(DATA_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Get the default data directory path.
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from(".local/share"))
            .join(DATA_DIR_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.page.title.trim().is_empty() {
            return Err(Error::ConfigValidation {
                message: "page.title must not be empty".to_string(),
            });
        }

        if self.page.empty_message.trim().is_empty() {
            return Err(Error::ConfigValidation {
                message: "page.empty_message must not be empty".to_string(),
            });
        }

        if let Some(path) = &self.storage.database_path {
            if path.as_os_str().is_empty() {
                return Err(Error::ConfigValidation {
                    message: "storage.database_path must not be empty".to_string(),
                });
            }
        }

        Ok(())
    }

    /// Get the database path, resolving defaults if not set.
    #[must_use]
    pub fn database_path(&self) -> PathBuf {
        self.storage
            .database_path
            .clone()
            .unwrap_or_else(|| Self::default_data_dir().join(DATABASE_FILE_NAME))
    }
}
