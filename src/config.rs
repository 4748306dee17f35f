//! YAML configuration file support for the verification pipeline.
//!
//! Lets an embedder define the engine's per-stage tunables and the store's
//! connection settings in a single YAML file instead of constructing
//! [`engine::EngineConfig`] and [`store::StoreConfig`] by hand. The HTTP
//! server's own bind address, auth, and rate-limit settings stay on
//! `server::ServerConfig`'s environment-driven loader — this file only
//! covers the pipeline.
//!
//! ## Example YAML configuration
//!
//! ```yaml
//! version: "1.0"
//!
//! store:
//!   database_url: "postgres://localhost/proptrust"
//!   max_connections: 10
//!
//! engine:
//!   extraction_timeout: 60000
//!   translation_timeout: 30000
//!   classification_timeout: 20000
//!   ledger_timeout: 30000
//!   ledger_backend: Local
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use engine::EngineConfig;
use store::StoreConfig;

/// Errors that can occur when loading a pipeline configuration file.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration for the pipeline: store connection plus
/// every per-stage tunable the engine reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropTrustConfig {
    /// Configuration format version.
    pub version: String,

    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub engine: EngineConfig,
}

impl PropTrustConfig {
    /// Load a YAML configuration file from the given path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: PropTrustConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }
    }
}

impl Default for PropTrustConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            store: StoreConfig::default(),
            engine: EngineConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_valid_yaml() {
        let yaml = r#"
version: "1.0"
store:
  database_url: "postgres://localhost/proptrust_test"
  max_connections: 5
"#;
        let config = PropTrustConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.store.database_url, "postgres://localhost/proptrust_test");
        assert_eq!(config.store.max_connections, 5);
    }

    #[test]
    fn test_load_from_file() {
        let yaml = r#"
version: "1.0"
"#;
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(yaml.as_bytes()).unwrap();

        let config = PropTrustConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.version, "1.0");
    }

    #[test]
    fn test_default_config() {
        let config = PropTrustConfig::default();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.engine.extraction_timeout.as_secs(), 60);
    }

    #[test]
    fn test_unsupported_version_rejected() {
        let yaml = r#"
version: "2.0"
"#;
        let result = PropTrustConfig::from_yaml(yaml);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("unsupported"));
    }
}
