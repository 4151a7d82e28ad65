//! HomeValue Auth — mock login flow, persisted session and capped
//! login history, plus the admin portal gate.

pub mod admin;
pub mod config;
pub mod error;
pub mod session;
pub mod validation;

pub use admin::AdminGate;
pub use config::AuthConfig;
pub use error::AuthError;
pub use session::SessionManager;
pub use validation::validate_credentials;
