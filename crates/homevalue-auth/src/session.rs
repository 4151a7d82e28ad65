//! Session manager — login, logout and login history.
//!
//! The manager owns the in-memory session and mirrors it to the store
//! under [`SESSION_KEY`]. Login history lives only in the store under
//! [`HISTORY_KEY`] and is read on demand.
//!
//! Storage failures never reach the caller: an unreadable session means
//! logged out, an unreadable history means empty history. The session
//! write and the history write are separate keys with no transaction
//! between them, and concurrent logins on one manager are last-writer-wins.

use homevalue_core::error::CoreResult;
use homevalue_core::keys::{HISTORY_KEY, SESSION_KEY};
use homevalue_core::models::history::{HistoryEntry, HistoryLog};
use homevalue_core::models::session::Session;
use homevalue_core::store::KeyValueStore;
use tokio::sync::watch;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::config::AuthConfig;
use crate::validation;

/// Owns "who is logged in" and "who has logged in before".
///
/// Generic over the store so the same manager runs against an in-memory
/// map in tests and a durable backend in production.
pub struct SessionManager<S: KeyValueStore> {
    store: S,
    config: AuthConfig,
    session: watch::Sender<Option<Session>>,
}

impl<S: KeyValueStore> SessionManager<S> {
    /// Rehydrate the session from `store`. Never fails.
    pub async fn new(store: S, config: AuthConfig) -> Self {
        let restored = load_session(&store).await;
        if let Some(session) = &restored {
            debug!(email = %session.email, "Session restored from store");
        }
        let (session, _) = watch::channel(restored);

        Self {
            store,
            config,
            session,
        }
    }

    /// Mock login: any non-empty email with a long enough password.
    ///
    /// Invalid input returns `false` at once without touching state.
    /// Otherwise waits `login_delay`, then sets and persists the session
    /// (overwriting any current one) and records a history entry. Once
    /// the wait starts the login always completes.
    pub async fn login(&self, email: &str, password: &str) -> bool {
        if let Err(e) = validation::validate_credentials(email, password, &self.config) {
            debug!(email, error = %e, "Login rejected");
            return false;
        }

        sleep(self.config.login_delay).await;

        let session = Session::new(email);
        self.session.send_replace(Some(session.clone()));

        if let Err(e) = self.persist_session(&session).await {
            warn!(email, error = %e, "Failed to persist session");
        }
        if let Err(e) = self.record_history(email).await {
            warn!(email, error = %e, "Failed to record login history");
        }

        info!(email, "Login succeeded");
        true
    }

    /// Clear the session. Idempotent; history is kept.
    pub async fn logout(&self) {
        let previous = self.session.send_replace(None);

        if let Err(e) = self.store.remove(SESSION_KEY).await {
            warn!(error = %e, "Failed to remove persisted session");
        }

        if let Some(session) = previous {
            info!(email = %session.email, "Logged out");
        }
    }

    /// Snapshot of the login history, most recent first.
    pub async fn history(&self) -> Vec<HistoryEntry> {
        self.read_history().await.into_entries()
    }

    /// The current session, if any.
    pub fn current(&self) -> Option<Session> {
        self.session.borrow().clone()
    }

    /// Receiver notified on every login and logout.
    pub fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.session.subscribe()
    }

    pub fn is_privileged(&self) -> bool {
        self.session
            .borrow()
            .as_ref()
            .is_some_and(|s| self.config.is_privileged(s))
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    async fn persist_session(&self, session: &Session) -> CoreResult<()> {
        let raw = serde_json::to_string(session)?;
        self.store.set(SESSION_KEY, raw).await
    }

    async fn record_history(&self, email: &str) -> CoreResult<()> {
        let mut log = self.read_history().await;
        log.record(HistoryEntry::now(email), self.config.history_capacity);
        let raw = serde_json::to_string(&log)?;
        self.store.set(HISTORY_KEY, raw).await
    }

    async fn read_history(&self) -> HistoryLog {
        match self.store.get(HISTORY_KEY).await {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!(error = %e, "Stored login history is unreadable; treating as empty");
                HistoryLog::new()
            }),
            Ok(None) => HistoryLog::new(),
            Err(e) => {
                warn!(error = %e, "Failed to read login history; treating as empty");
                HistoryLog::new()
            }
        }
    }
}

async fn load_session<S: KeyValueStore>(store: &S) -> Option<Session> {
    match store.get(SESSION_KEY).await {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                warn!(error = %e, "Stored session is unreadable; starting logged out");
                None
            }
        },
        Ok(None) => None,
        Err(e) => {
            warn!(error = %e, "Failed to read stored session; starting logged out");
            None
        }
    }
}
