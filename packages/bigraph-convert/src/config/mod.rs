//! Converter configuration (YAML loading)
//!
//! ```yaml
//! version: 1
//! atomic_writes: true
//! dump_graphs: false
//! log_filter: info
//! ```
//!
//! Every field except `version` is optional and falls back to
//! [`ConvertConfig::default`].

mod error;

pub use error::{ConfigError, ConfigResult};

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Schema versions this build understands
pub const SUPPORTED_VERSIONS: &[u32] = &[1];

/// Converter settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ConvertConfig {
    /// Schema version (always 1 for v1)
    pub version: u32,

    /// Write each output to a temp file in the destination directory,
    /// then rename it into place
    pub atomic_writes: bool,

    /// Print each parsed graph (matrix rows, then labels) to stdout
    pub dump_graphs: bool,

    /// Fallback tracing filter when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            version: 1,
            atomic_writes: true,
            dump_graphs: false,
            log_filter: "info".to_string(),
        }
    }
}

impl ConvertConfig {
    /// Load and validate a YAML configuration file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    /// Parse and validate YAML text
    pub fn from_yaml_str(text: &str) -> ConfigResult<Self> {
        // `version` defaults through serde, so check for it on the raw document
        let raw: serde_yaml::Value = serde_yaml::from_str(text)?;
        let version = raw
            .get("version")
            .and_then(serde_yaml::Value::as_u64)
            .ok_or(ConfigError::MissingVersion)?;

        if !SUPPORTED_VERSIONS.iter().any(|v| u64::from(*v) == version) {
            return Err(ConfigError::UnsupportedVersion {
                found: u32::try_from(version).unwrap_or(u32::MAX),
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        Ok(serde_yaml::from_value(raw)?)
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> ConfigResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
