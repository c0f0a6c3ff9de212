//! Path management for Runway
//!
//! ## Path Resolution Order
//!
//! 1. `RUNWAY_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/runway` or `~/.config/runway`
//! 3. Windows: `%APPDATA%\runway`

use std::path::PathBuf;

use crate::error::RunwayError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "RUNWAY_DATA_DIR";

/// Manages all paths used by Runway
#[derive(Debug, Clone)]
pub struct RunwayPaths {
    base_dir: PathBuf,
}

impl RunwayPaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home/config directory can be determined.
    pub fn new() -> Result<Self, RunwayError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create RunwayPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory holding the `budget` and `expenses` records
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), RunwayError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| RunwayError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| RunwayError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, RunwayError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME").map_err(|_| {
                RunwayError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("runway"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, RunwayError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| RunwayError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("runway"))
}
