//! Credential checks run before any simulated round trip.

use crate::config::AuthConfig;
use crate::error::AuthError;

/// Reject an empty email or a password shorter than
/// `config.min_password_length`, measured in UTF-16 code units as a
/// browser form measures it.
pub fn validate_credentials(
    email: &str,
    password: &str,
    config: &AuthConfig,
) -> Result<(), AuthError> {
    if email.is_empty() || password.encode_utf16().count() < config.min_password_length {
        return Err(AuthError::InvalidInput {
            min_password_length: config.min_password_length,
        });
    }
    Ok(())
}
