//! Configuration models

use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_storage_key() -> String {
    "auth_token".to_string()
}

fn default_warning_lead_secs() -> u64 {
    60
}

fn default_forced_logout_delay_secs() -> u64 {
    60
}

fn default_expiry_check_interval_secs() -> u64 {
    60
}

fn default_roles() -> Vec<String> {
    vec![
        "admin".to_string(),
        "manager".to_string(),
        "user".to_string(),
    ]
}

fn default_role() -> String {
    "user".to_string()
}

/// Remote administration API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the administration API
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    /// Validate API configuration
    pub fn validate(&self) -> Result<(), String> {
        Url::parse(&self.base_url).map_err(|e| format!("Invalid API base URL: {}", e))?;

        if self.timeout_secs == 0 {
            return Err("API request timeout must be non-zero".to_string());
        }

        Ok(())
    }

    /// Merge API configurations (other takes precedence on non-defaults)
    pub fn merge(mut self, other: Self) -> Self {
        if other.base_url != default_base_url() {
            self.base_url = other.base_url;
        }
        if other.timeout_secs != default_timeout_secs() {
            self.timeout_secs = other.timeout_secs;
        }
        self
    }

    /// Request timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Session lifecycle configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Key under which the token is held in the shared store
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// How long before token expiry the warning fires, in seconds
    #[serde(default = "default_warning_lead_secs")]
    pub warning_lead_secs: u64,
    /// Delay between the warning and the forced logout, in seconds
    #[serde(default = "default_forced_logout_delay_secs")]
    pub forced_logout_delay_secs: u64,
    /// Interval of the periodic wall-clock expiry re-check, in seconds
    #[serde(default = "default_expiry_check_interval_secs")]
    pub expiry_check_interval_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            warning_lead_secs: default_warning_lead_secs(),
            forced_logout_delay_secs: default_forced_logout_delay_secs(),
            expiry_check_interval_secs: default_expiry_check_interval_secs(),
        }
    }
}

impl SessionConfig {
    /// Validate session configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.storage_key.is_empty() {
            return Err("Session storage key cannot be empty".to_string());
        }
        if self.forced_logout_delay_secs == 0 {
            return Err("Forced logout delay must be non-zero".to_string());
        }
        if self.expiry_check_interval_secs == 0 {
            return Err("Expiry check interval must be non-zero".to_string());
        }
        Ok(())
    }

    /// Merge session configurations (other takes precedence on non-defaults)
    pub fn merge(mut self, other: Self) -> Self {
        if other.storage_key != default_storage_key() {
            self.storage_key = other.storage_key;
        }
        if other.warning_lead_secs != default_warning_lead_secs() {
            self.warning_lead_secs = other.warning_lead_secs;
        }
        if other.forced_logout_delay_secs != default_forced_logout_delay_secs() {
            self.forced_logout_delay_secs = other.forced_logout_delay_secs;
        }
        if other.expiry_check_interval_secs != default_expiry_check_interval_secs() {
            self.expiry_check_interval_secs = other.expiry_check_interval_secs;
        }
        self
    }

    /// Warning lead time as a `Duration`
    pub fn warning_lead(&self) -> Duration {
        Duration::from_secs(self.warning_lead_secs)
    }

    /// Forced logout delay as a `Duration`
    pub fn forced_logout_delay(&self) -> Duration {
        Duration::from_secs(self.forced_logout_delay_secs)
    }

    /// Periodic expiry check interval as a `Duration`
    pub fn expiry_check_interval(&self) -> Duration {
        Duration::from_secs(self.expiry_check_interval_secs)
    }
}

/// Role-permission engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RbacConfig {
    /// Reject unknown permission keys instead of treating them as roots
    #[serde(default)]
    pub strict: bool,
    /// Roles the console manages
    #[serde(default = "default_roles")]
    pub roles: Vec<String>,
    /// Role assigned to newly created users
    #[serde(default = "default_role")]
    pub default_role: String,
}

impl Default for RbacConfig {
    fn default() -> Self {
        Self {
            strict: false,
            roles: default_roles(),
            default_role: default_role(),
        }
    }
}

impl RbacConfig {
    /// Validate RBAC configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.roles.is_empty() {
            return Err("At least one role must be configured".to_string());
        }
        if !self.roles.contains(&self.default_role) {
            return Err(format!(
                "Default role '{}' is not in the configured role list",
                self.default_role
            ));
        }
        Ok(())
    }

    /// Merge RBAC configurations (other takes precedence on non-defaults)
    pub fn merge(mut self, other: Self) -> Self {
        if other.strict {
            self.strict = other.strict;
        }
        if other.roles != default_roles() {
            self.roles = other.roles;
        }
        if other.default_role != default_role() {
            self.default_role = other.default_role;
        }
        self
    }
}
