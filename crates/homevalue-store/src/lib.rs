//! HomeValue Store — backends for the [`KeyValueStore`] trait.
//!
//! This crate provides:
//! - [`MemoryStore`], an in-process map for tests and ephemeral runs
//! - [`JsonFileStore`], a single JSON document on disk
//! - [`SurrealStore`], a SurrealDB `kv` table ([`apply_schema`])
//! - Error types ([`StoreError`])
//!
//! [`KeyValueStore`]: homevalue_core::store::KeyValueStore

mod error;
mod file;
mod memory;
mod schema;
mod surreal;

pub use error::StoreError;
pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use schema::{apply_schema, kv_schema};
pub use surreal::SurrealStore;
