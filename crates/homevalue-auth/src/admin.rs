//! Admin portal gate.
//!
//! Independent of [`SessionManager`](crate::SessionManager): a successful
//! admin check neither creates a session nor records history.

use tokio::time::sleep;
use tracing::{info, warn};

use crate::config::AuthConfig;
use crate::error::AuthError;

pub struct AdminGate {
    config: AuthConfig,
}

impl AdminGate {
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    /// Wait `admin_login_delay`, then accept only the configured admin
    /// email and password.
    pub async fn verify(&self, email: &str, password: &str) -> Result<(), AuthError> {
        sleep(self.config.admin_login_delay).await;

        if email == self.config.admin_email && password == self.config.admin_password {
            info!(email, "Admin login accepted");
            Ok(())
        } else {
            warn!(email, "Admin login rejected");
            Err(AuthError::AdminDenied)
        }
    }
}
