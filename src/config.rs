//! Configuration management and validation.
//!
//! The explorer is configured once per invocation and the resulting
//! [`ExplorerConfig`] is handed to each component explicitly. Values are
//! layered: built-in defaults, then an optional JSON config file, then
//! command-line overrides.

use crate::constants::{
    APP_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_CENTER, DEFAULT_OUTPUT_DIR, DEFAULT_SOURCE_FILE,
};
use crate::error::{HotSpringError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Runtime configuration for loading and exporting spring data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Path to the bundled spring table
    pub source_path: PathBuf,

    /// Directory receiving exported artifacts
    pub output_dir: PathBuf,

    /// Map centre (latitude, longitude) used when no records are shown
    pub default_center: (f64, f64),
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from(DEFAULT_SOURCE_FILE),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            default_center: DEFAULT_CENTER,
        }
    }
}

impl ExplorerConfig {
    /// Location of the user-level config file, if a config directory exists
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            HotSpringError::configuration("Could not determine user config directory")
        })?;
        Ok(config_dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load a config file; fields missing from the file keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            HotSpringError::configuration(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Self = serde_json::from_str(&content).map_err(|e| {
            HotSpringError::configuration(format!(
                "Invalid config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        debug!("Loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    pub fn with_source_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.source_path = path.into();
        self
    }

    pub fn with_output_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_dir = path.into();
        self
    }

    pub fn with_default_center(mut self, latitude: f64, longitude: f64) -> Self {
        self.default_center = (latitude, longitude);
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.source_path.as_os_str().is_empty() {
            return Err(HotSpringError::configuration("source path must not be empty"));
        }

        if self.output_dir.as_os_str().is_empty() {
            return Err(HotSpringError::configuration(
                "output directory must not be empty",
            ));
        }

        let (latitude, longitude) = self.default_center;
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(HotSpringError::configuration(format!(
                "default centre latitude {} is outside [-90, 90]",
                latitude
            )));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(HotSpringError::configuration(format!(
                "default centre longitude {} is outside [-180, 180]",
                longitude
            )));
        }

        Ok(())
    }
}
