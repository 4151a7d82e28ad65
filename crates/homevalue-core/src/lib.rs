//! HomeValue Core — domain models, error types and the key-value
//! storage abstraction shared by every other crate.

pub mod error;
pub mod keys;
pub mod models;
pub mod store;

pub use error::{CoreError, CoreResult};
pub use store::KeyValueStore;
