//! # Argus Console Core
//!
//! Headless client core of the Argus security-scanning administration
//! console: session lifecycle, role-permission engine, and a typed client
//! for the administration API. UI, routing, and rendering live elsewhere;
//! this crate owns the state and the rules.
//!
//! ## Features
//!
//! - **Permission dependency engine**: a fixed acyclic graph over
//!   permission flags with pure toggle-cascade evaluation
//! - **Session lifecycle**: token ownership, expiry warning and forced
//!   logout timers, periodic wall-clock re-checks, cross-tab teardown
//! - **Typed API client**: auth, permissions, projects, scans, users, and
//!   dashboard endpoints over one authenticated transport
//! - **Injectable seams**: token store and timer scheduler are traits, so
//!   the whole session machine runs under test with fakes
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use argus_console::{
//!     ApiClient, Config, MemoryTokenStore, SessionManager, TokioScheduler,
//! };
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/console.yaml").await?;
//!
//!     let store = Arc::new(MemoryTokenStore::new());
//!     let api = Arc::new(ApiClient::new(&config.api, store.clone())?);
//!     let session = SessionManager::new(
//!         config.session.clone(),
//!         api.clone(),
//!         store,
//!         Arc::new(TokioScheduler),
//!     );
//!     session.start_store_listener();
//!
//!     let user = session.login("admin@example.com", "secret").await?;
//!     println!("Logged in as {}", user.name);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Toggling Permissions
//!
//! ```rust
//! use argus_console::PermissionGraph;
//! use std::collections::HashMap;
//!
//! let graph = PermissionGraph::standard();
//! let outcome = graph.apply_toggle("create_scan", true, &HashMap::new());
//! assert_eq!(outcome.permissions.get("view_projects"), Some(&true));
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod auth;
pub mod client;
pub mod config;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use utils::error::{ConsoleError, Result};

// Export the permission dependency engine
pub use auth::rbac::{PermissionGraph, PermissionRole, PermissionSet, ToggleOutcome};

// Export the session lifecycle machinery
pub use auth::session::{
    MemoryTokenStore, Scheduler, SessionEvent, SessionManager, SessionState, StoreEvent,
    TimerHandle, TokenStore, TokioScheduler,
};

// Export the API client and its models
pub use client::ApiClient;
pub use client::types::{
    DashboardSummary, ListQuery, LoginResponse, Pagination, ProjectDetails, RolePermissions,
    ScanDetails, UserProfile,
};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
