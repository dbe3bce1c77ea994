//! Path management for tally-export
//!
//! ## Path Resolution Order
//!
//! 1. `TALLY_EXPORT_HOME` environment variable (if set)
//! 2. `$XDG_CONFIG_HOME/tally-export` (if set)
//! 3. The platform configuration directory (`~/.config/tally-export`,
//!    `%APPDATA%\tally-export`, ...)

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::TallyError;

/// Environment variable overriding the base directory
pub const HOME_ENV_VAR: &str = "TALLY_EXPORT_HOME";

const APP_DIR_NAME: &str = "tally-export";

/// Manages all paths used by tally-export
#[derive(Debug, Clone)]
pub struct TallyPaths {
    /// Base directory for all tally-export files
    base_dir: PathBuf,
}

impl TallyPaths {
    /// Create a new TallyPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no configuration directory can be determined.
    pub fn new() -> Result<Self, TallyError> {
        let base_dir = match std::env::var_os(HOME_ENV_VAR) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create TallyPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the entity definition file
    pub fn definitions_file(&self) -> PathBuf {
        self.base_dir.join("exports.yaml")
    }

    /// Get the default output directory for exported files
    pub fn default_output_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Ensure the base and default output directories exist
    pub fn ensure_directories(&self) -> Result<(), TallyError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| TallyError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.default_output_dir())
            .map_err(|e| TallyError::Io(format!("Failed to create output directory: {}", e)))?;

        Ok(())
    }

    /// Check if tally-export has been initialized (settings file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, TallyError> {
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(xdg).join(APP_DIR_NAME));
    }

    BaseDirs::new()
        .map(|dirs| dirs.config_dir().join(APP_DIR_NAME))
        .ok_or_else(|| TallyError::Config("Could not determine a configuration directory".into()))
}
