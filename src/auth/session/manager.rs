//! Session lifecycle manager
//!
//! Owns the single source of truth for "is the user authenticated": holds
//! the token via the shared store, watches its expiry, fires the warning
//! and the forced logout, and reacts to the token disappearing from under
//! us (another tab logged out).

use crate::auth::token;
use crate::client::ApiClient;
use crate::client::types::UserProfile;
use crate::config::SessionConfig;
use crate::utils::error::{ConsoleError, Result};
use chrono::{DateTime, Utc};
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use super::scheduler::{Scheduler, TimerHandle};
use super::store::{StoreEvent, TokenStore};
use super::types::{SessionEvent, SessionState};

/// Live timer handles for the current token.
///
/// At most one of each exists per token; arming a new token cancels the
/// previous handles by reference first.
#[derive(Default)]
struct TimerRegistry {
    warning: Option<Box<dyn TimerHandle>>,
    expiry: Option<Box<dyn TimerHandle>>,
    recheck: Option<Box<dyn TimerHandle>>,
}

impl TimerRegistry {
    fn cancel_all(&mut self) {
        for handle in [
            self.warning.take(),
            self.expiry.take(),
            self.recheck.take(),
        ]
        .into_iter()
        .flatten()
        {
            handle.cancel();
        }
    }
}

/// Session lifecycle manager, one per application lifetime
pub struct SessionManager {
    config: SessionConfig,
    api: Arc<ApiClient>,
    store: Arc<dyn TokenStore>,
    scheduler: Arc<dyn Scheduler>,
    state: RwLock<SessionState>,
    current_user: RwLock<Option<UserProfile>>,
    timers: Mutex<TimerRegistry>,
    events: broadcast::Sender<SessionEvent>,
}

impl SessionManager {
    /// Create a new session manager
    pub fn new(
        config: SessionConfig,
        api: Arc<ApiClient>,
        store: Arc<dyn TokenStore>,
        scheduler: Arc<dyn Scheduler>,
    ) -> Arc<Self> {
        let (events, _) = broadcast::channel(16);
        Arc::new(Self {
            config,
            api,
            store,
            scheduler,
            state: RwLock::new(SessionState::Unauthenticated),
            current_user: RwLock::new(None),
            timers: Mutex::new(TimerRegistry::default()),
            events,
        })
    }

    /// Current session state
    pub fn state(&self) -> SessionState {
        *self.state.read()
    }

    /// Whether a session is live
    pub fn is_authenticated(&self) -> bool {
        self.state.read().is_authenticated()
    }

    /// Cached profile of the logged-in user
    pub fn current_user(&self) -> Option<UserProfile> {
        self.current_user.read().clone()
    }

    /// Subscribe to session notifications
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    /// Authenticate against the API and start a session.
    ///
    /// On success the token is stored, the warning/expiry timers are armed
    /// (replacing any pair from a previous token), and the user profile
    /// from the login response is cached and returned.
    pub async fn login(self: &Arc<Self>, email: &str, password: &str) -> Result<UserProfile> {
        let response = self.api.login(email, password).await?;

        let Some(expires_at) = token::expiry_of(&response.token) else {
            return Err(ConsoleError::auth(
                "Login returned an unreadable session token",
            ));
        };
        if expires_at <= Utc::now() {
            return Err(ConsoleError::auth(
                "Login returned an already-expired session token",
            ));
        }

        self.store.set(&response.token);
        *self.state.write() = SessionState::Authenticated { expires_at };
        *self.current_user.write() = Some(response.user.clone());
        self.arm_timers(expires_at);

        info!(user = %response.user.email, "Login successful");
        Ok(response.user)
    }

    /// End the session. Idempotent.
    ///
    /// Local state is cleared first; the server-side invalidation is best
    /// effort and its failure is ignored, the local session end is
    /// authoritative.
    pub async fn logout(&self) {
        *self.state.write() = SessionState::Unauthenticated;
        self.clear_session();

        if let Err(e) = self.api.logout().await {
            debug!("Logout notification failed: {}", e);
        }

        info!("Logged out");
        let _ = self.events.send(SessionEvent::LoggedOut);
    }

    /// Restore a session from a previously stored token.
    ///
    /// An expired or unreadable stored token is discarded. A readable one
    /// arms the timers and refreshes the profile; if that fetch fails the
    /// session is torn down again rather than left half-restored.
    pub async fn resume(self: &Arc<Self>) -> Option<UserProfile> {
        let stored = self.store.get()?;

        if token::is_expired(&stored) {
            debug!("Stored token is expired, discarding");
            self.store.remove();
            return None;
        }
        let expires_at = token::expiry_of(&stored)?;

        *self.state.write() = SessionState::Authenticated { expires_at };
        self.arm_timers(expires_at);

        match self.api.me().await {
            Ok(user) => {
                *self.current_user.write() = Some(user.clone());
                info!(user = %user.email, "Session resumed");
                Some(user)
            }
            Err(e) => {
                error!("Session resume failed: {}", e);
                *self.state.write() = SessionState::Unauthenticated;
                self.clear_session();
                None
            }
        }
    }

    /// Re-fetch the current user's profile to keep cached data current.
    ///
    /// Failures are logged and swallowed; ending the session on a bad
    /// response is exclusively the transport layer's call.
    pub async fn refresh_user_profile(&self) {
        match self.api.me().await {
            Ok(user) => {
                *self.current_user.write() = Some(user);
                debug!("User profile refreshed");
            }
            Err(e) => {
                error!("{}", ConsoleError::ProfileRefresh(e.to_string()));
            }
        }
    }

    /// Spawn a task that reacts to the token being removed by another tab
    pub fn start_store_listener(self: &Arc<Self>) -> JoinHandle<()> {
        let mut rx = self.store.subscribe();
        let weak = Arc::downgrade(self);
        tokio::spawn(async move {
            loop {
                match rx.recv().await {
                    Ok(StoreEvent::Removed) => {
                        let Some(manager) = weak.upgrade() else { break };
                        manager.handle_external_removal();
                    }
                    Ok(StoreEvent::Set) => {}
                    Err(broadcast::error::RecvError::Lagged(_)) => {}
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        })
    }

    /// Force this manager unauthenticated after an external token removal.
    ///
    /// No server-side logout call: whoever removed the token already made
    /// one. A session that is already over is left as-is, so an echo of
    /// our own removal never clobbers an `Expired` state.
    pub fn handle_external_removal(&self) {
        {
            let mut state = self.state.write();
            if !state.is_authenticated() {
                return;
            }
            *state = SessionState::Unauthenticated;
        }
        *self.current_user.write() = None;
        self.timers.lock().cancel_all();

        info!("Session token removed externally");
        let _ = self.events.send(SessionEvent::EndedElsewhere);
    }

    /// Arm the warning timer and the periodic re-check for a token,
    /// cancelling whatever pair a previous token left behind
    fn arm_timers(self: &Arc<Self>, expires_at: DateTime<Utc>) {
        let mut timers = self.timers.lock();
        timers.cancel_all();

        let until_expiry = (expires_at - Utc::now()).to_std().unwrap_or_default();
        let warning_delay = until_expiry.saturating_sub(self.config.warning_lead());

        let weak = Arc::downgrade(self);
        timers.warning = Some(self.scheduler.schedule_after(
            warning_delay,
            Box::new(move || {
                if let Some(manager) = weak.upgrade() {
                    manager.on_warning(expires_at);
                }
            }),
        ));

        let weak = Arc::downgrade(self);
        timers.recheck = Some(self.scheduler.schedule_after(
            self.config.expiry_check_interval(),
            Box::new(move || {
                if let Some(manager) = weak.upgrade() {
                    manager.on_recheck();
                }
            }),
        ));

        debug!(%expires_at, "Session timers armed");
    }

    /// Warning timer fired: surface the warning and arm the forced logout
    fn on_warning(self: &Arc<Self>, expires_at: DateTime<Utc>) {
        {
            let mut state = self.state.write();
            if !state.is_authenticated() {
                return;
            }
            *state = SessionState::Warned { expires_at };
        }

        warn!(
            "Session expires in {}s",
            self.config.forced_logout_delay().as_secs()
        );
        let _ = self.events.send(SessionEvent::ExpiryWarning);

        let weak = Arc::downgrade(self);
        let handle = self.scheduler.schedule_after(
            self.config.forced_logout_delay(),
            Box::new(move || {
                if let Some(manager) = weak.upgrade() {
                    manager.expire_session();
                }
            }),
        );

        let mut timers = self.timers.lock();
        timers.warning = None;
        timers.expiry = Some(handle);
    }

    /// Periodic wall-clock re-check.
    ///
    /// Catches tokens that slipped past their expiry without the warning
    /// timer firing, e.g. after the host slept through the deadline.
    fn on_recheck(self: &Arc<Self>) {
        if !self.state.read().is_authenticated() {
            return;
        }

        let expired = match self.store.get() {
            Some(stored) => token::is_expired(&stored),
            // External removal is the store listener's business.
            None => false,
        };

        if expired {
            self.expire_session();
            return;
        }

        let weak = Arc::downgrade(self);
        let handle = self.scheduler.schedule_after(
            self.config.expiry_check_interval(),
            Box::new(move || {
                if let Some(manager) = weak.upgrade() {
                    manager.on_recheck();
                }
            }),
        );
        self.timers.lock().recheck = Some(handle);
    }

    /// The one path that ends a session on expiry
    fn expire_session(&self) {
        {
            let mut state = self.state.write();
            if !state.is_authenticated() {
                return;
            }
            *state = SessionState::Expired;
        }
        self.clear_session();

        warn!("Session expired");
        let _ = self.events.send(SessionEvent::Expired);
    }

    /// Clear credentials, cached profile, and pending timers
    fn clear_session(&self) {
        *self.current_user.write() = None;
        self.timers.lock().cancel_all();
        self.store.remove();
    }
}
