//! Role-permission endpoints
//!
//! Failures map to the dedicated fetch/update variants the access-control
//! screen renders, except 401 which stays visible for the transport-level
//! interceptor to act on.

use crate::auth::rbac::PermissionRole;
use crate::utils::error::{ConsoleError, Result};

use super::client::ApiClient;
use super::types::RolePermissions;

fn as_fetch_error(error: ConsoleError) -> ConsoleError {
    match error {
        unauthorized @ ConsoleError::Unauthorized(_) => unauthorized,
        other => ConsoleError::PermissionFetch(other.to_string()),
    }
}

fn as_update_error(error: ConsoleError) -> ConsoleError {
    match error {
        unauthorized @ ConsoleError::Unauthorized(_) => unauthorized,
        other => ConsoleError::PermissionUpdate(other.to_string()),
    }
}

impl ApiClient {
    /// Fetch the permission set of a role
    pub async fn permissions_for_role(&self, role: PermissionRole) -> Result<RolePermissions> {
        self.get_json(&format!("/api/auth/permissions/{}", role))
            .await
            .map_err(as_fetch_error)
    }

    /// Fetch the permission set of the current user
    pub async fn my_permissions(&self) -> Result<RolePermissions> {
        self.get_json("/api/auth/permissions/me")
            .await
            .map_err(as_fetch_error)
    }

    /// Persist an updated permission set for a role.
    ///
    /// On failure the caller keeps its local edits; nothing here mutates
    /// state.
    pub async fn update_permissions(&self, update: &RolePermissions) -> Result<RolePermissions> {
        self.post_json("/api/auth/permissions/update/", update)
            .await
            .map_err(as_update_error)
    }
}
