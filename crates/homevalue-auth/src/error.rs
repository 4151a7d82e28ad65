//! Authentication error types.

use homevalue_core::error::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Please enter a valid email and a password of at least {min_password_length} characters.")]
    InvalidInput { min_password_length: usize },

    #[error("admin access denied")]
    AdminDenied,
}

impl From<AuthError> for CoreError {
    fn from(err: AuthError) -> Self {
        CoreError::Validation {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_denied_is_a_validation_error() {
        let err: CoreError = AuthError::AdminDenied.into();
        assert!(matches!(err, CoreError::Validation { ref message } if message == "admin access denied"));
    }
}
