//! Session lifecycle
//!
//! Token ownership, expiry monitoring, auto-logout scheduling, and
//! cross-tab teardown.

mod manager;
mod scheduler;
mod store;
pub mod types;


// Re-export public types and structs
pub use manager::SessionManager;
pub use scheduler::{Scheduler, TimerCallback, TimerHandle, TokioScheduler};
pub use store::{MemoryTokenStore, StoreEvent, TokenStore};
pub use types::{SessionEvent, SessionState};
