//! Application configuration, layered from defaults and environment.

use std::path::PathBuf;

use homevalue_auth::AuthConfig;
use thiserror::Error;

pub const ENV_STORE: &str = "HOMEVALUE_STORE";
pub const ENV_STORE_PATH: &str = "HOMEVALUE_STORE_PATH";
pub const ENV_PRIVILEGED_EMAIL: &str = "HOMEVALUE_PRIVILEGED_EMAIL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown store backend {0:?} (expected memory, file or surreal)")]
    UnknownBackend(String),
}

/// Where session and history are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    Memory,
    File { path: PathBuf },
    /// Embedded in-memory SurrealDB.
    Surreal { namespace: String, database: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub store: StoreBackend,
    pub auth: AuthConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store: StoreBackend::File {
                path: PathBuf::from("homevalue-store.json"),
            },
            auth: AuthConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Overlay variables returned by `lookup` onto the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let path = lookup(ENV_STORE_PATH).map(PathBuf::from);

        if let Some(backend) = lookup(ENV_STORE) {
            config.store = match backend.as_str() {
                "memory" => StoreBackend::Memory,
                "file" => StoreBackend::File {
                    path: path.clone().unwrap_or_else(|| "homevalue-store.json".into()),
                },
                "surreal" => StoreBackend::Surreal {
                    namespace: "homevalue".into(),
                    database: "main".into(),
                },
                other => return Err(ConfigError::UnknownBackend(other.to_string())),
            };
        } else if let Some(path) = path {
            config.store = StoreBackend::File { path };
        }

        if let Some(email) = lookup(ENV_PRIVILEGED_EMAIL) {
            config.auth.privileged_email = email;
        }

        Ok(config)
    }
}
