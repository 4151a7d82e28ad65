//! HomeValue — application entry point.
//!
//! Restores the persisted session, reports it together with the login
//! history and the catalog, then exits.

mod config;

use homevalue_auth::SessionManager;
use homevalue_catalog::{Catalog, CatalogConfig};
use homevalue_core::store::KeyValueStore;
use homevalue_store::{JsonFileStore, MemoryStore, SurrealStore};
use surrealdb::Surreal;
use surrealdb::engine::local::Mem;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, StoreBackend};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("homevalue=info")),
        )
        .json()
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            std::process::exit(2);
        }
    };

    info!(store = ?config.store, "Starting HomeValue");

    match config.store.clone() {
        StoreBackend::Memory => run(MemoryStore::new(), config).await,
        StoreBackend::File { path } => run(JsonFileStore::new(path), config).await,
        StoreBackend::Surreal {
            namespace,
            database,
        } => match open_surreal(&namespace, &database).await {
            Ok(store) => run(store, config).await,
            Err(e) => {
                error!(error = %e, "Failed to open SurrealDB store");
                std::process::exit(1);
            }
        },
    }

    info!("HomeValue stopped.");
}

async fn open_surreal(
    namespace: &str,
    database: &str,
) -> Result<SurrealStore<surrealdb::engine::local::Db>, homevalue_store::StoreError> {
    let db = Surreal::new::<Mem>(()).await?;
    db.use_ns(namespace).use_db(database).await?;
    SurrealStore::init(db).await
}

async fn run<S: KeyValueStore>(store: S, config: AppConfig) {
    let sessions = SessionManager::new(store, config.auth).await;

    match sessions.current() {
        Some(session) => info!(
            email = %session.email,
            privileged = sessions.is_privileged(),
            "Restored session"
        ),
        None => info!("No active session"),
    }

    let history = sessions.history().await;
    info!(
        entries = history.len(),
        latest = ?history.first().map(|e| &e.email),
        "Login history"
    );

    let catalog = Catalog::new(CatalogConfig::default());
    let summaries = catalog.list().await;
    info!(enhancements = summaries.len(), "Catalog loaded");
}
