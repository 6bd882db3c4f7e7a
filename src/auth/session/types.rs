//! Session state and event types

use chrono::{DateTime, Utc};

/// Where the session currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No live session
    Unauthenticated,
    /// Live session with a known expiry
    Authenticated {
        /// Instant the token stops being accepted
        expires_at: DateTime<Utc>,
    },
    /// Live session, expiry warning already surfaced
    Warned {
        /// Instant the token stops being accepted
        expires_at: DateTime<Utc>,
    },
    /// Session ended because the token expired
    Expired,
}

impl SessionState {
    /// Whether a session is live (warned sessions still are)
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. } | Self::Warned { .. })
    }
}

/// Notifications the manager emits for the UI layer to render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The session will expire shortly; the user should save their work
    ExpiryWarning,
    /// The session reached its expiry and was terminated
    Expired,
    /// The session ended by explicit logout
    LoggedOut,
    /// The token was removed by another tab or window
    EndedElsewhere,
}
