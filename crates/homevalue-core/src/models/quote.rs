//! Quote request models.
//!
//! Quoting is a stub: every request is acknowledged, nothing is priced.

use serde::{Deserialize, Serialize};

/// Contact details submitted with a quote request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteAck {
    pub ok: bool,
    pub message: String,
}
