//! Shared token store
//!
//! The token is the one piece of state shared across console tabs. The
//! store abstracts the browser-style key-value storage plus its
//! change-notification channel, so the session manager can be driven by an
//! in-memory fake in tests.

use parking_lot::RwLock;
use tokio::sync::broadcast;
use tracing::debug;

/// Change notification from the shared token store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    /// A token value was written
    Set,
    /// The token was removed, possibly by another tab
    Removed,
}

/// Persistent, change-observable holder of the session token
pub trait TokenStore: Send + Sync {
    /// Current token, if any
    fn get(&self) -> Option<String>;

    /// Store a token
    fn set(&self, token: &str);

    /// Remove the stored token
    fn remove(&self);

    /// Subscribe to change notifications
    fn subscribe(&self) -> broadcast::Receiver<StoreEvent>;
}

/// In-process token store.
///
/// Stands in for browser storage: one slot, observable by any number of
/// session managers. Removal events reach every subscriber, which is what
/// lets a second manager react to a logout it did not perform.
pub struct MemoryTokenStore {
    slot: RwLock<Option<String>>,
    events: broadcast::Sender<StoreEvent>,
}

impl MemoryTokenStore {
    /// Create an empty store
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(16);
        Self {
            slot: RwLock::new(None),
            events,
        }
    }
}

impl Default for MemoryTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.slot.read().clone()
    }

    fn set(&self, token: &str) {
        *self.slot.write() = Some(token.to_string());
        let _ = self.events.send(StoreEvent::Set);
        debug!("Token stored");
    }

    fn remove(&self) {
        let removed = self.slot.write().take().is_some();
        if removed {
            let _ = self.events.send(StoreEvent::Removed);
            debug!("Token removed");
        }
    }

    fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }
}
