//! [`KeyValueStore`] persisted as a single JSON object on disk.
//!
//! Every write rewrites the whole document through a sibling temp file
//! followed by a rename, so readers never observe a half-written file.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use homevalue_core::error::CoreResult;
use homevalue_core::store::KeyValueStore;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::error::StoreError;

type Document = BTreeMap<String, String>;

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles within this process.
    lock: Arc<Mutex<()>>,
}

impl JsonFileStore {
    /// The file is created lazily on the first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing or empty file reads as an empty document. A document that
    /// does not parse is discarded with a warning and replaced on the
    /// next write.
    async fn load(&self) -> Result<Document, StoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Document::new()),
            Err(e) => return Err(e.into()),
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Document::new());
        }

        match serde_json::from_slice(&bytes) {
            Ok(doc) => Ok(doc),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Discarding unreadable store file");
                Ok(Document::new())
            }
        }
    }

    async fn save(&self, doc: &Document) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        tokio::fs::write(&tmp, serde_json::to_vec_pretty(doc)?).await?;
        tokio::fs::rename(&tmp, &self.path).await?;

        debug!(path = %self.path.display(), keys = doc.len(), "Store file written");
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &str) -> CoreResult<Option<String>> {
        let _guard = self.lock.lock().await;
        let mut doc = self.load().await?;
        Ok(doc.remove(key))
    }

    async fn set(&self, key: &str, value: String) -> CoreResult<()> {
        let _guard = self.lock.lock().await;
        let mut doc = self.load().await?;
        doc.insert(key.to_string(), value);
        self.save(&doc).await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> CoreResult<()> {
        let _guard = self.lock.lock().await;
        let mut doc = self.load().await?;
        if doc.remove(key).is_some() {
            self.save(&doc).await?;
        }
        Ok(())
    }
}
