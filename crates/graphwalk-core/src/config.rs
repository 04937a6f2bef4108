//! Configuration for graphwalk
//!
//! Read from a TOML file passed with `--config`. Every section and key is
//! optional; missing values fall back to the defaults below.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::format::OutputFormat;

/// Default vertex ceiling for exhaustive simple-path counting
pub const DEFAULT_MAX_PATH_COUNT_VERTICES: usize = 20;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphwalkConfig {
    /// Bounds on expensive algorithms
    #[serde(default)]
    pub limits: LimitsConfig,

    /// Output defaults
    #[serde(default)]
    pub output: OutputConfig,
}

/// Bounds on algorithms whose cost grows exponentially with graph size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Largest graph (in vertices) on which simple paths are counted
    #[serde(default = "default_max_path_count_vertices")]
    pub max_path_count_vertices: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_path_count_vertices: DEFAULT_MAX_PATH_COUNT_VERTICES,
        }
    }
}

fn default_max_path_count_vertices() -> usize {
    DEFAULT_MAX_PATH_COUNT_VERTICES
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Format used when `--format` is not given
    #[serde(default)]
    pub format: OutputFormat,
}

impl GraphwalkConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), ?config, "config_loaded");
        Ok(config)
    }

    /// Load configuration if a path was given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
