//! SurrealDB implementation of [`KeyValueStore`].

use homevalue_core::error::CoreResult;
use homevalue_core::store::KeyValueStore;
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use tracing::debug;

use crate::error::StoreError;
use crate::schema;

#[derive(Debug, SurrealValue)]
struct DataRow {
    data: String,
}

#[derive(Clone)]
pub struct SurrealStore<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealStore<C> {
    /// Wrap a connection whose schema is already in place.
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }

    /// Apply the `kv` schema, then wrap the connection.
    pub async fn init(db: Surreal<C>) -> Result<Self, StoreError> {
        schema::apply_schema(&db).await?;
        Ok(Self::new(db))
    }
}

impl<C: Connection> KeyValueStore for SurrealStore<C> {
    async fn get(&self, key: &str) -> CoreResult<Option<String>> {
        let mut result = self
            .db
            .query("SELECT data FROM type::record('kv', $key)")
            .bind(("key", key.to_string()))
            .await
            .map_err(StoreError::from)?;

        let rows: Vec<DataRow> = result.take(0).map_err(StoreError::from)?;
        Ok(rows.into_iter().next().map(|row| row.data))
    }

    async fn set(&self, key: &str, value: String) -> CoreResult<()> {
        self.db
            .query(
                "UPSERT type::record('kv', $key) SET \
                 data = $data, \
                 updated_at = time::now()",
            )
            .bind(("key", key.to_string()))
            .bind(("data", value))
            .await
            .map_err(StoreError::from)?
            .check()
            .map_err(StoreError::from)?;

        debug!(key, "kv record written");
        Ok(())
    }

    async fn remove(&self, key: &str) -> CoreResult<()> {
        self.db
            .query("DELETE type::record('kv', $key)")
            .bind(("key", key.to_string()))
            .await
            .map_err(StoreError::from)?
            .check()
            .map_err(StoreError::from)?;

        Ok(())
    }
}
