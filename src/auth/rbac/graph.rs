//! Permission dependency graph
//!
//! A fixed mapping from permission identifier to its ordered prerequisite
//! list. The table is process-wide, read-only configuration; acyclicity is
//! checked once at construction.

use crate::utils::error::{ConsoleError, Result};
use once_cell::sync::Lazy;
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

/// Built-in dependency table: permission -> ordered prerequisites.
///
/// Each list is the full ancestor set of the permission, so enabling one
/// permission enables everything it transitively needs in a single merge.
const DEPENDENCY_TABLE: &[(&str, &[&str])] = &[
    ("view_projects", &[]),
    ("create_project", &["view_projects"]),
    ("update_project", &["view_projects", "create_project"]),
    ("delete_project", &["view_projects", "create_project"]),
    ("view_scans", &["view_projects"]),
    ("create_scan", &["view_projects", "view_scans"]),
    ("update_scan", &["view_projects", "view_scans"]),
    ("delete_scan", &["view_projects", "view_scans"]),
    ("view_findings", &["view_projects", "view_scans"]),
    ("validate_finding", &["view_projects", "view_scans", "view_findings"]),
    ("delete_finding", &["view_projects", "view_scans", "view_findings"]),
    ("view_reports", &[]),
    ("create_report", &["view_reports"]),
    ("update_report", &["view_reports", "create_report"]),
    ("delete_report", &["view_reports", "create_report"]),
];

/// Presentation grouping of permissions, in display order
const CATEGORY_TABLE: &[(&str, &[&str])] = &[
    (
        "Projects",
        &["create_project", "delete_project", "update_project", "view_projects"],
    ),
    (
        "Scans",
        &["view_scans", "create_scan", "update_scan", "delete_scan"],
    ),
    (
        "Findings",
        &["view_findings", "validate_finding", "delete_finding"],
    ),
    (
        "Reports",
        &["create_report", "update_report", "delete_report", "view_reports"],
    ),
];

/// Permission dependency graph over a closed permission set
#[derive(Debug, Clone)]
pub struct PermissionGraph {
    /// Permission -> ordered prerequisite list
    prerequisites: HashMap<String, Vec<String>>,
}

impl PermissionGraph {
    /// Build a graph from explicit entries, rejecting cyclic tables
    pub fn new<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, Vec<String>)>,
    {
        let graph = Self {
            prerequisites: entries.into_iter().collect(),
        };
        graph.check_acyclic()?;

        debug!("Permission graph built with {} permissions", graph.prerequisites.len());
        Ok(graph)
    }

    /// The built-in console permission graph
    pub fn standard() -> &'static PermissionGraph {
        static GRAPH: Lazy<PermissionGraph> = Lazy::new(|| {
            PermissionGraph::new(DEPENDENCY_TABLE.iter().map(|(permission, required)| {
                (
                    (*permission).to_string(),
                    required.iter().map(|r| (*r).to_string()).collect(),
                )
            }))
            .expect("built-in permission table is acyclic")
        });
        &GRAPH
    }

    /// Presentation categories and their permissions, in display order
    pub fn categories() -> &'static [(&'static str, &'static [&'static str])] {
        CATEGORY_TABLE
    }

    /// Whether the graph knows this permission identifier
    pub fn contains(&self, permission: &str) -> bool {
        self.prerequisites.contains_key(permission)
    }

    /// All permission identifiers in the graph
    pub fn permissions(&self) -> impl Iterator<Item = &str> {
        self.prerequisites.keys().map(String::as_str)
    }

    /// Configured ancestor list for a permission.
    ///
    /// Empty for roots and for unknown identifiers; unknown keys are treated
    /// as unconstrained.
    pub fn prerequisites_of(&self, permission: &str) -> &[String] {
        self.prerequisites
            .get(permission)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Direct dependents of a permission: every permission whose prerequisite
    /// list contains it. One level deep, not transitively closed.
    pub fn dependents_of(&self, permission: &str) -> Vec<String> {
        let mut dependents: Vec<String> = self
            .prerequisites
            .iter()
            .filter(|(_, required)| required.iter().any(|r| r == permission))
            .map(|(name, _)| name.clone())
            .collect();
        dependents.sort();
        dependents
    }

    /// Transitive closure of `prerequisites_of`
    pub fn transitive_prerequisites_of(&self, permission: &str) -> BTreeSet<String> {
        let mut closed = BTreeSet::new();
        let mut pending: Vec<&str> = self
            .prerequisites_of(permission)
            .iter()
            .map(String::as_str)
            .collect();

        while let Some(current) = pending.pop() {
            if closed.insert(current.to_string()) {
                pending.extend(self.prerequisites_of(current).iter().map(String::as_str));
            }
        }
        closed
    }

    /// Transitive closure of `dependents_of`.
    ///
    /// Query-only: the disable cascade in `apply_toggle` deliberately stays
    /// one level deep.
    pub fn transitive_dependents_of(&self, permission: &str) -> BTreeSet<String> {
        let mut closed = BTreeSet::new();
        let mut pending = self.dependents_of(permission);

        while let Some(current) = pending.pop() {
            if closed.insert(current.clone()) {
                pending.extend(self.dependents_of(&current));
            }
        }
        closed
    }

    /// Reject tables where a permission transitively requires itself
    fn check_acyclic(&self) -> Result<()> {
        for permission in self.prerequisites.keys() {
            if self.transitive_prerequisites_of(permission).contains(permission) {
                return Err(ConsoleError::Validation(format!(
                    "Permission dependency cycle involving '{}'",
                    permission
                )));
            }
        }
        Ok(())
    }
}
