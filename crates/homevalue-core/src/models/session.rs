//! Session domain model.

use serde::{Deserialize, Serialize};

/// The currently authenticated identity. Absence (`None`) means logged out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub email: String,
}

impl Session {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}
