mod config;

pub use config::{AttendanceConfig, Config};

use std::path::PathBuf;

use crate::error::Result;

/// Returns `~/.config/jornada[-dev]/` based on JORNADA_ENV.
///
/// Set JORNADA_ENV=dev to use a separate development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("JORNADA_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("jornada-dev")
    } else {
        base_dir.join("jornada")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
