//! Schema for the SurrealDB backend.

use surrealdb::{Connection, Surreal};
use tracing::info;

use crate::error::StoreError;

/// One record per key; the record id is the storage key. Every statement
/// is `IF NOT EXISTS`, so applying the schema again is a no-op.
const KV_SCHEMA: &str = "\
DEFINE TABLE IF NOT EXISTS kv SCHEMAFULL;
DEFINE FIELD IF NOT EXISTS data ON TABLE kv TYPE string;
DEFINE FIELD IF NOT EXISTS updated_at ON TABLE kv TYPE datetime \
    DEFAULT time::now();
";

/// Define the `kv` table. Safe to call on every start.
pub async fn apply_schema<C: Connection>(db: &Surreal<C>) -> Result<(), StoreError> {
    db.query(KV_SCHEMA)
        .await?
        .check()
        .map_err(|e| StoreError::Schema(e.to_string()))?;

    info!("kv schema ready");
    Ok(())
}

/// Raw DDL for the `kv` table.
pub fn kv_schema() -> &'static str {
    KV_SCHEMA
}
