//! Configuration management for the console core
//!
//! This module handles loading, validation, and merging of all console
//! configuration.

pub mod models;

pub use models::{ApiConfig, RbacConfig, SessionConfig};

use crate::utils::error::{ConsoleError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the console core
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Remote API configuration
    #[serde(default)]
    pub api: ApiConfig,
    /// Session lifecycle configuration
    #[serde(default)]
    pub session: SessionConfig,
    /// Role-permission engine configuration
    #[serde(default)]
    pub rbac: RbacConfig,
}

#[allow(dead_code)]
impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ConsoleError::Config(format!("Failed to read config file: {}", e)))?;

        let config: Self = serde_yaml::from_str(&content)
            .map_err(|e| ConsoleError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let mut config = Self::default();

        if let Ok(base_url) = std::env::var("ARGUS_API_BASE_URL") {
            config.api.base_url = base_url;
        }
        if let Ok(timeout) = std::env::var("ARGUS_API_TIMEOUT_SECS") {
            config.api.timeout_secs = timeout
                .parse()
                .map_err(|e| ConsoleError::Config(format!("Invalid ARGUS_API_TIMEOUT_SECS: {}", e)))?;
        }
        if let Ok(key) = std::env::var("ARGUS_SESSION_STORAGE_KEY") {
            config.session.storage_key = key;
        }
        if let Ok(strict) = std::env::var("ARGUS_RBAC_STRICT") {
            config.rbac.strict = strict
                .parse()
                .map_err(|e| ConsoleError::Config(format!("Invalid ARGUS_RBAC_STRICT: {}", e)))?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.api
            .validate()
            .map_err(|e| ConsoleError::Config(format!("API config error: {}", e)))?;

        self.session
            .validate()
            .map_err(|e| ConsoleError::Config(format!("Session config error: {}", e)))?;

        self.rbac
            .validate()
            .map_err(|e| ConsoleError::Config(format!("RBAC config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.api = self.api.merge(other.api);
        self.session = self.session.merge(other.session);
        self.rbac = self.rbac.merge(other.rbac);
        self
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| ConsoleError::Config(format!("Failed to serialize config: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_config_from_file() {
        let config_content = r#"
api:
  base_url: "https://scanner.example.com"
  timeout_secs: 15

session:
  storage_key: "argus_token"
  warning_lead_secs: 120

rbac:
  strict: true
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(config_content.as_bytes()).unwrap();

        let config = Config::from_file(temp_file.path()).await.unwrap();

        assert_eq!(config.api.base_url, "https://scanner.example.com");
        assert_eq!(config.api.timeout_secs, 15);
        assert_eq!(config.session.storage_key, "argus_token");
        assert_eq!(config.session.warning_lead_secs, 120);
        // Unset fields fall back to defaults
        assert_eq!(config.session.forced_logout_delay_secs, 60);
        assert!(config.rbac.strict);
    }

    #[tokio::test]
    async fn test_config_from_file_rejects_invalid() {
        let config_content = r#"
api:
  base_url: "not a url"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(config_content.as_bytes()).unwrap();

        let result = Config::from_file(temp_file.path()).await;
        assert!(matches!(result, Err(ConsoleError::Config(_))));
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_merge() {
        let base = Config::default();
        let mut other = Config::default();
        other.api.base_url = "https://override.example.com".to_string();
        other.rbac.strict = true;

        let merged = base.merge(other);
        assert_eq!(merged.api.base_url, "https://override.example.com");
        assert!(merged.rbac.strict);
        assert_eq!(merged.session.warning_lead_secs, 60);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let yaml = config.to_yaml().unwrap();
        assert!(!yaml.is_empty());
    }
}
