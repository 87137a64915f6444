//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding where patient records are written
pub const DATA_DIR_ENV: &str = "PATIENT_REGISTRATION_DATA_DIR";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RegistrationConfig {
    /// Session location uuid attached to every identifier
    pub location_uuid: Option<String>,
    /// Prefix for generated patient identifiers
    pub identifier_prefix: Option<String>,
    /// Directory where registered patients are stored
    pub data_dir: Option<PathBuf>,
}

impl RegistrationConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("org", "patient-registration", "patient-registration-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit path, defaulting when absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let config: RegistrationConfig = serde_json::from_str(&content)?;
            tracing::debug!("Loaded config from {}", path.display());
            return Ok(config);
        }
        Ok(Self::default())
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            self.save_to(&path)?;
        }
        Ok(())
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Resolve the data directory: env override, then config, then platform default
    pub fn resolved_data_dir(&self) -> PathBuf {
        if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
            if !dir.is_empty() {
                return PathBuf::from(dir);
            }
        }
        if let Some(dir) = &self.data_dir {
            return dir.clone();
        }
        Self::project_dirs()
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from(".patient-registration"))
    }

    /// Prefix for generated identifiers, empty when unset
    pub fn identifier_prefix(&self) -> &str {
        self.identifier_prefix.as_deref().unwrap_or_default()
    }
}
