//! Resolved configuration with provenance
//!
//! The merged configuration plus a record of every layer that fed it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;
use tracing::debug;

use super::defaults::BuiltinDefaults;
use super::matrix::MatrixConfig;
use super::merge::merge_layers;

/// Schema version for resolved_config
pub const SCHEMA_VERSION: u32 = 1;

/// Schema identifier
pub const SCHEMA_ID: &str = "launcher-matrix/resolved_config@1";

/// Default config file, relative to the working directory
pub const DEFAULT_CONFIG_FILE: &str = "launchers.toml";

/// Where a layer came from
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ConfigOrigin {
    Builtin,
    File,
    Cli,
}

/// One contributing layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigSource {
    pub origin: ConfigOrigin,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// SHA-256 of the file bytes, hex encoded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,
}

impl ConfigSource {
    fn builtin() -> Self {
        Self {
            origin: ConfigOrigin::Builtin,
            path: None,
            digest: None,
        }
    }

    fn cli() -> Self {
        Self {
            origin: ConfigOrigin::Cli,
            path: None,
            digest: None,
        }
    }

    fn file(path: &Path, bytes: &[u8]) -> Self {
        Self {
            origin: ConfigOrigin::File,
            path: Some(path.display().to_string()),
            digest: Some(hex::encode(Sha256::digest(bytes))),
        }
    }
}

/// Merged launcher configuration and its sources, lowest precedence first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedConfig {
    pub schema_version: u32,
    pub schema_id: String,
    pub created_at: DateTime<Utc>,
    pub config: Value,
    pub sources: Vec<ConfigSource>,
}

impl ResolvedConfig {
    /// Layer the builtin defaults, an optional TOML file and optional CLI overrides.
    pub fn build(
        config_path: Option<&Path>,
        cli_overrides: Option<Value>,
    ) -> Result<Self, ConfigError> {
        let mut layers = vec![(BuiltinDefaults::default().to_value(), ConfigSource::builtin())];

        if let Some(path) = config_path {
            layers.push(read_file_layer(path)?);
        }
        if let Some(cli) = cli_overrides {
            layers.push((cli, ConfigSource::cli()));
        }

        let (values, sources): (Vec<Value>, Vec<ConfigSource>) = layers.into_iter().unzip();
        debug!(layers = sources.len(), "merging config layers");

        Ok(Self {
            schema_version: SCHEMA_VERSION,
            schema_id: SCHEMA_ID.to_string(),
            created_at: Utc::now(),
            config: merge_layers(values),
            sources,
        })
    }

    /// Typed view of the merged configuration
    pub fn matrix(&self) -> Result<MatrixConfig, ConfigError> {
        MatrixConfig::deserialize(&self.config)
            .map_err(|e| ConfigError::ValidationError(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Read a TOML config file. Tables keep their document order.
fn read_file_layer(path: &Path) -> Result<(Value, ConfigSource), ConfigError> {
    let bytes =
        fs::read(path).map_err(|e| ConfigError::IoError(format!("{}: {}", path.display(), e)))?;
    let source = ConfigSource::file(path, &bytes);

    let text = std::str::from_utf8(&bytes)
        .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
    let value: Value = toml::from_str(text)
        .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;

    debug!(path = %path.display(), digest = ?source.digest, "loaded config file");
    Ok((value, source))
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}
