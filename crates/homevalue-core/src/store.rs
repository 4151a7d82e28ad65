//! Key-value storage abstraction.
//!
//! Values are opaque strings (JSON in practice). Each operation is
//! atomic for its own key only; there are no multi-key transactions.

use crate::error::CoreResult;

pub trait KeyValueStore: Send + Sync {
    /// Returns `Ok(None)` when the key is absent.
    fn get(&self, key: &str) -> impl Future<Output = CoreResult<Option<String>>> + Send;
    fn set(&self, key: &str, value: String) -> impl Future<Output = CoreResult<()>> + Send;
    /// Removing an absent key is not an error.
    fn remove(&self, key: &str) -> impl Future<Output = CoreResult<()>> + Send;
}
