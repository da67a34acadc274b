//! Configuration loading functionality.
//!
//! Loads an [`EngineConfig`] from a YAML file. Missing keys fall back to
//! their defaults, so a deployment only states what it overrides.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::EngineConfig;

impl EngineConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file (e.g., "./config/engine.yaml")
    ///
    /// # Returns
    ///
    /// Returns the parsed configuration, or an error if:
    /// - The file does not exist (`ConfigNotFound`)
    /// - The file contains invalid YAML or an unknown timezone
    ///   (`ConfigParseError`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use attendance_engine::config::EngineConfig;
    ///
    /// let cfg = EngineConfig::from_yaml_file("./config/engine.yaml")?;
    /// # Ok::<(), attendance_engine::error::EngineError>(())
    /// ```
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}
