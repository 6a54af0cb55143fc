//! TOML-based application configuration.
//!
//! Stores the form setup a user would otherwise re-enter every day:
//! - The concept roster (names and windows)
//! - Default clock-in/clock-out times for the attendance window
//!
//! Configuration is stored at `~/.config/jornada/config.toml`. Attendance
//! records themselves are never persisted; only the setup is.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::clock::ClockTime;
use crate::concept::ConceptRoster;
use crate::error::{ConfigError, Result};

/// Default attendance window configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceConfig {
    /// Clock-in to use when the caller does not supply one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clock_in: Option<ClockTime>,
    /// Clock-out to use when the caller does not supply one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clock_out: Option<ClockTime>,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/jornada/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub attendance: AttendanceConfig,
    #[serde(default = "default_roster", rename = "concepts")]
    pub roster: ConceptRoster,
}

fn default_roster() -> ConceptRoster {
    ConceptRoster::default()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            attendance: AttendanceConfig::default(),
            roster: ConceptRoster::default(),
        }
    }
}

impl Config {
    /// Path of the configuration file inside [`data_dir`].
    pub fn config_path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load the configuration, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load_or_default() -> Self {
        Self::config_path()
            .ok()
            .and_then(|path| Self::load_from(&path).ok())
            .unwrap_or_default()
    }

    /// Load configuration from an explicit TOML file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config = toml::from_str(&raw).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        Ok(config)
    }

    /// Save to the default configuration path.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        self.save_to(&path)
    }

    /// Save to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let raw =
            toml::to_string_pretty(self).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        std::fs::write(path, raw).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(())
    }
}
