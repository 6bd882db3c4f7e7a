//! RBAC type definitions

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Role-scoped permission flags, keyed by permission identifier
pub type PermissionSet = HashMap<String, bool>;

/// Roles managed by the console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionRole {
    /// Full administrative access
    Admin,
    /// Team management and scan operations
    Manager,
    /// Regular console user
    User,
}

impl fmt::Display for PermissionRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Admin => "admin",
            Self::Manager => "manager",
            Self::User => "user",
        };
        f.write_str(name)
    }
}

impl FromStr for PermissionRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "manager" => Ok(Self::Manager),
            "user" => Ok(Self::User),
            other => Err(format!("Unknown role: {}", other)),
        }
    }
}

/// Result of applying a single permission toggle
#[derive(Debug, Clone, PartialEq)]
pub struct ToggleOutcome {
    /// The updated permission set; the input set is never mutated
    pub permissions: PermissionSet,
    /// Permissions flipped by the cascade, beyond the toggled one itself
    pub cascaded: Vec<String>,
    /// The value the toggled permission was set to
    pub enabled: bool,
}

impl ToggleOutcome {
    /// Human-readable summary of the toggle, for the caller to surface.
    ///
    /// `"Enabled create_scan and 2 prerequisite permission(s)"` /
    /// `"Disabled create_project and 1 dependent permission(s)"`.
    pub fn summary(&self, permission: &str) -> String {
        if self.enabled {
            format!(
                "Enabled {} and {} prerequisite permission(s)",
                permission,
                self.cascaded.len()
            )
        } else {
            format!(
                "Disabled {} and {} dependent permission(s)",
                permission,
                self.cascaded.len()
            )
        }
    }
}
