//! Scan configuration
//!
//! Optional JSON file:
//!
//! ```json
//! { "log_level": "info" }
//! ```
//!
//! Missing keys take defaults. Command-line flags override the file.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::observability::Severity;

use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Minimum severity written to stderr (default: warn)
    #[serde(default = "default_log_level")]
    pub log_level: Severity,
}

fn default_log_level() -> Severity {
    Severity::Warn
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> CliResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Resolve from an optional file and an optional override
    pub fn resolve(path: Option<&Path>, log_level: Option<Severity>) -> CliResult<Self> {
        let mut config = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        if let Some(level) = log_level {
            config.log_level = level;
        }
        Ok(config)
    }
}
