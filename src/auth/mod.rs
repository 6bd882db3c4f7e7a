//! Authentication and access control
//!
//! Two cooperating cores: the permission dependency engine driving the
//! access-control screen, and the session lifecycle manager owning the
//! token from login to logout.

pub mod rbac;
pub mod session;
pub mod token;

pub use rbac::{PermissionGraph, PermissionRole, PermissionSet, ToggleOutcome};
pub use session::{
    MemoryTokenStore, Scheduler, SessionEvent, SessionManager, SessionState, StoreEvent,
    TimerHandle, TokenStore, TokioScheduler,
};
