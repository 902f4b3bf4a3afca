//! Configuration management for strata
//!
//! Settings come from built-in defaults, an optional YAML/TOML file and
//! `STRATA_*` environment variables, in that order of precedence. With no
//! file and no environment the defaults reproduce the stock behavior: seed 42,
//! 1% per category, results offered as `sampled_data.csv`.

use crate::core::error::{Error, Result};
use crate::stats::DEFAULT_SEED;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub mod loader;
pub mod validation;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrataConfig {
    /// Sampler settings
    pub sampling: SamplingConfig,
    /// Table preview settings
    pub display: DisplayConfig,
    /// Download settings
    pub output: OutputConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Sampler settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    /// Seed for every per-category draw
    pub seed: u64,
    /// Percentage selected when a session starts (1-100)
    pub default_percent: u32,
}

/// Table preview settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Rows shown in the preview after an upload
    pub preview_rows: usize,
    /// Rows shown when printing a sampled table
    pub max_rows: usize,
}

/// Download settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// File name offered for the sampled CSV
    pub file_name: String,
    /// MIME type attached to the download
    pub mime_type: String,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error, off)
    pub level: String,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            default_percent: 1,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            preview_rows: 5,
            max_rows: 50,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file_name: "sampled_data.csv".to_string(),
            mime_type: "text/csv".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl StrataConfig {
    /// Load configuration from file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        loader::load_from_file(path.as_ref())
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        loader::load_from_env()
    }

    /// Load configuration with automatic discovery
    pub fn load() -> Result<Self> {
        loader::auto_load()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        validation::validate_config(self)
    }

    /// Save configuration to a file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        loader::save_to_file(self, path.as_ref())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            Error::ConfigurationError(format!("Failed to serialize config to YAML: {}", e))
        })
    }

    /// Convert to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| {
            Error::ConfigurationError(format!("Failed to serialize config to TOML: {}", e))
        })
    }
}
