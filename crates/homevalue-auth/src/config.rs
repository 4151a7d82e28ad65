//! Authentication configuration.

use std::time::Duration;

use homevalue_core::models::history::DEFAULT_HISTORY_CAPACITY;
use homevalue_core::models::session::Session;

/// Configuration for the session manager and admin gate.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Minimum password length in UTF-16 code units (default: 6).
    pub min_password_length: usize,
    /// Simulated round trip before a login completes (default: 600 ms).
    pub login_delay: Duration,
    /// Maximum number of login history entries kept (default: 50).
    pub history_capacity: usize,
    /// The one account treated as privileged.
    pub privileged_email: String,
    /// Admin portal email.
    pub admin_email: String,
    /// Admin portal password.
    pub admin_password: String,
    /// Simulated round trip for the admin portal (default: 1200 ms).
    pub admin_login_delay: Duration,
}

impl AuthConfig {
    /// Exact, case-sensitive match against `privileged_email`.
    pub fn is_privileged(&self, session: &Session) -> bool {
        session.email == self.privileged_email
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            min_password_length: 6,
            login_delay: Duration::from_millis(600),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            privileged_email: "admin@homevalueplus.com".into(),
            admin_email: "admin@homevalueplus.com".into(),
            admin_password: "admin123".into(),
            admin_login_delay: Duration::from_millis(1200),
        }
    }
}
