//! Settings file management
//!
//! Non-secret connection settings stored in a TOML file. The API key is never
//! written here; it comes from CONGRESS_API_KEY or the command line.
//! Priority: environment variable > config.toml > built-in default

use super::Result;
use crate::error::StorageError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Settings persisted between runs
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Settings {
    /// Congress.gov API base URL
    pub base_url: Option<String>,
    /// Page size used when a request does not specify one
    pub default_limit: Option<u32>,
    /// Largest page size the API accepts
    pub max_limit: Option<u32>,
    /// Per-request timeout in seconds
    pub timeout_secs: Option<f64>,
    /// Retries after a 429 response
    pub max_retries: Option<u32>,
    /// Base delay in seconds for exponential backoff
    pub retry_base_delay_secs: Option<f64>,
}

impl Settings {
    /// Load settings from file; a missing file yields defaults
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let settings_path = match path {
            Some(p) => p,
            None => Self::settings_file_path()?,
        };

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let content = fs::read_to_string(&settings_path).map_err(|source| StorageError::FileIo {
            path: settings_path.to_string_lossy().to_string(),
            source,
        })?;

        toml::from_str(&content).map_err(|e| StorageError::SettingsParse {
            message: format!("Failed to parse settings file: {}", e),
        })
    }

    /// Save settings to file, creating parent directories as needed
    pub fn save(&self, path: Option<PathBuf>) -> Result<()> {
        let settings_path = match path {
            Some(p) => p,
            None => Self::settings_file_path()?,
        };

        if let Some(parent) = settings_path.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError::FileIo {
                path: parent.to_string_lossy().to_string(),
                source,
            })?;
        }

        let toml_content = toml::to_string(self).map_err(|e| StorageError::SettingsParse {
            message: format!("Failed to serialize settings: {}", e),
        })?;

        fs::write(&settings_path, toml_content).map_err(|source| StorageError::FileIo {
            path: settings_path.to_string_lossy().to_string(),
            source,
        })?;

        Ok(())
    }

    /// Default location: ~/.config/congress-cli/config.toml
    pub fn settings_file_path() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().ok_or(StorageError::ConfigDirNotFound)?;

        Ok(home_dir
            .join(".config")
            .join("congress-cli")
            .join("config.toml"))
    }

    pub fn is_empty(&self) -> bool {
        *self == Settings::default()
    }
}
