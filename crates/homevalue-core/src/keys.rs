//! Fixed storage keys.

/// JSON-encoded [`Session`](crate::models::session::Session); removed on logout.
pub const SESSION_KEY: &str = "hv_user";

/// JSON-encoded login history array, index 0 = most recent.
pub const HISTORY_KEY: &str = "hv_login_history";
