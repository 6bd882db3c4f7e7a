//! Toggle-cascade evaluation
//!
//! Pure functions over a permission set: enabling a permission pulls its
//! prerequisites up, disabling it pushes its direct dependents down. The
//! input set is never mutated and the permissive path never fails.

use crate::config::RbacConfig;
use crate::utils::error::{ConsoleError, Result};
use tracing::debug;

use super::graph::PermissionGraph;
use super::types::{PermissionSet, ToggleOutcome};

impl PermissionGraph {
    /// Apply a single toggle and restore the dependency invariant.
    ///
    /// Enable: the permission and every configured prerequisite become
    /// `true`; nothing is turned off. Disable: the permission becomes
    /// `false` and every currently-enabled direct dependent is turned off
    /// with it; dependents that were already off (or absent) are left
    /// untouched, and the cascade does not recurse to second-order
    /// dependents.
    ///
    /// Unknown identifiers are treated as roots with no prerequisites and
    /// no dependents.
    pub fn apply_toggle(
        &self,
        permission: &str,
        desired: bool,
        current: &PermissionSet,
    ) -> ToggleOutcome {
        let mut updated = current.clone();
        let mut cascaded = Vec::new();

        updated.insert(permission.to_string(), desired);

        if desired {
            for required in self.prerequisites_of(permission) {
                if current.get(required).copied() != Some(true) {
                    cascaded.push(required.clone());
                }
                updated.insert(required.clone(), true);
            }
        } else {
            for dependent in self.dependents_of(permission) {
                if current.get(&dependent).copied() == Some(true) {
                    updated.insert(dependent.clone(), false);
                    cascaded.push(dependent);
                }
            }
        }

        debug!(
            permission,
            desired,
            cascaded = cascaded.len(),
            "Applied permission toggle"
        );

        ToggleOutcome {
            permissions: updated,
            cascaded,
            enabled: desired,
        }
    }

    /// Strict variant: rejects identifiers the graph does not know.
    ///
    /// Gated behind `RbacConfig.strict`; the permissive `apply_toggle` is
    /// the compatible default.
    pub fn apply_toggle_strict(
        &self,
        permission: &str,
        desired: bool,
        current: &PermissionSet,
    ) -> Result<ToggleOutcome> {
        if !self.contains(permission) {
            return Err(ConsoleError::Validation(format!(
                "Unknown permission: '{}'",
                permission
            )));
        }
        Ok(self.apply_toggle(permission, desired, current))
    }

    /// Config-dispatched toggle: strict mode rejects unknown identifiers,
    /// the default stays permissive
    pub fn toggle_with_config(
        &self,
        config: &RbacConfig,
        permission: &str,
        desired: bool,
        current: &PermissionSet,
    ) -> Result<ToggleOutcome> {
        if config.strict {
            self.apply_toggle_strict(permission, desired, current)
        } else {
            Ok(self.apply_toggle(permission, desired, current))
        }
    }

    /// Prerequisite violations in a permission set: pairs of
    /// `(enabled permission, disabled-or-missing prerequisite)`.
    ///
    /// Empty for any set produced by `apply_toggle` starting from a
    /// consistent one.
    pub fn violations(&self, set: &PermissionSet) -> Vec<(String, String)> {
        let mut found = Vec::new();
        for (permission, enabled) in set {
            if !enabled {
                continue;
            }
            for required in self.prerequisites_of(permission) {
                if set.get(required).copied() != Some(true) {
                    found.push((permission.clone(), required.clone()));
                }
            }
        }
        found.sort();
        found
    }
}
