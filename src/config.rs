//! Configuration management for taskboard.
//!
//! This module handles the `.taskboard/config.yaml` file which stores
//! user settings for the board engine.

use crate::board::filter::CaseSensitivity;
use crate::error::Result;
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file path relative to the base directory.
pub const CONFIG_FILE_PATH: &str = ".taskboard/config.yaml";

const fn default_true() -> bool {
    true
}

/// User configuration for the board engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoardConfig {
    /// Whether search text must match the stored casing exactly.
    #[serde(default = "default_true")]
    pub case_sensitive_search: bool,

    /// Append every committed mutation to the JSONL mutation log.
    #[serde(default)]
    pub debug_logging: bool,

    /// Override for the database location.
    /// None means `~/.taskboard/boards.sqlite3`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_path: Option<PathBuf>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self { case_sensitive_search: true, debug_logging: false, database_path: None }
    }
}

impl BoardConfig {
    /// Load config from a specific base directory, returning None if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load_from(base_dir: &Path) -> Result<Option<Self>> {
        let config_path = Self::config_path(base_dir);
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(Some(config))
    }

    /// Load config from a base directory, falling back to defaults if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load_or_default(base_dir: &Path) -> Result<Self> {
        Ok(Self::load_from(base_dir)?.unwrap_or_default())
    }

    /// Save config to a specific base directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, base_dir: &Path) -> Result<()> {
        let config_path = Self::config_path(base_dir);

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_yaml::to_string(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    /// Get the config file path for a base directory.
    #[must_use]
    pub fn config_path(base_dir: &Path) -> PathBuf {
        base_dir.join(CONFIG_FILE_PATH)
    }

    /// The search case sensitivity selected by this config.
    #[must_use]
    pub const fn case_sensitivity(&self) -> CaseSensitivity {
        if self.case_sensitive_search {
            CaseSensitivity::Sensitive
        } else {
            CaseSensitivity::Insensitive
        }
    }

    /// Resolve the database path, using the configured override when present.
    ///
    /// Relative overrides are resolved against `base_dir`.
    #[must_use]
    pub fn resolve_database_path(&self, base_dir: &Path) -> PathBuf {
        match &self.database_path {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => base_dir.join(path),
            None => paths::data_dir_in(base_dir).join(paths::DATABASE_FILENAME),
        }
    }
}
