//! # Compass Configuration
//!
//! Optional YAML file read at startup. Every field has a default, so an
//! empty file (or no file at all) yields [`CompassConfig::default`].
//!
//! ```yaml
//! data_dir: ./compass-data
//! initial_slider: 50
//! results_limit: 8
//! password_sha256: 8d3a1838c96994fdc083afd45060f5cc1f72983e6a995daca367806584d9ea15
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use scc_core::SliderValue;

use crate::access::DEFAULT_PASSWORD_SHA256;

/// Errors raised while loading the configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config {path}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file is not valid YAML for [`CompassConfig`].
    #[error("failed to parse YAML at {path}")]
    YamlParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// The password digest is not 64 hex characters.
    #[error("password_sha256 must be 64 hex characters, got {0} characters")]
    InvalidDigest(usize),
}

/// Runtime configuration for the compass pages and the CLI.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompassConfig {
    /// Directory holding `local_storage.json` and `session_storage.json`.
    pub data_dir: PathBuf,
    /// Slider position when a compass page opens.
    pub initial_slider: SliderValue,
    /// Number of result cards shown.
    pub results_limit: usize,
    /// Lowercase hex SHA-256 of the access password.
    pub password_sha256: String,
}

impl std::fmt::Debug for CompassConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompassConfig")
            .field("data_dir", &self.data_dir)
            .field("initial_slider", &self.initial_slider)
            .field("results_limit", &self.results_limit)
            .field("password_sha256", &"[REDACTED]")
            .finish()
    }
}

impl Default for CompassConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".compass"),
            initial_slider: SliderValue::BALANCED,
            results_limit: scc_render::results::DEFAULT_RESULTS_LIMIT,
            password_sha256: DEFAULT_PASSWORD_SHA256.to_string(),
        }
    }
}

impl CompassConfig {
    /// Parse a configuration document.
    pub fn from_yaml(path: &Path, content: &str) -> Result<Self, ConfigError> {
        // serde_yaml reads an empty document as unit, not as an empty map.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let mut config: Self = serde_yaml::from_str(content).map_err(|e| ConfigError::YamlParse {
            path: path.to_path_buf(),
            source: e,
        })?;
        config.password_sha256 = config.password_sha256.trim().to_ascii_lowercase();
        let digest = &config.password_sha256;
        if digest.len() != 64 || !digest.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ConfigError::InvalidDigest(digest.len()));
        }
        Ok(config)
    }

    /// Load the configuration file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config = Self::from_yaml(path, &content)?;
        tracing::debug!(path = %path.display(), ?config, "loaded compass config");
        Ok(config)
    }

    /// Load `path` when given, else use defaults.
    pub fn load_optional(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }
}
