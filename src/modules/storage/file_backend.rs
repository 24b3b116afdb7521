//! Single-file JSON backend
//!
//! The whole key space lives in one JSON object on disk (`{"key": "<raw
//! json>"}`). The file is read once on open and rewritten after every
//! mutation through a sibling temp file + rename.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, info};

use super::{StorageBackend, StorageError};

pub struct FileBackend {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileBackend {
    /// Open (or lazily create) the data file at `path`
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref().to_path_buf();

        let entries = match tokio::fs::read_to_string(&path).await {
            Ok(raw) if raw.trim().is_empty() => BTreeMap::new(),
            Ok(raw) => serde_json::from_str(&raw).map_err(|source| StorageError::Corrupt {
                key: path.display().to_string(),
                source,
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    tokio::fs::create_dir_all(parent).await?;
                }
                BTreeMap::new()
            }
            Err(e) => return Err(e.into()),
        };

        info!(
            "File storage opened at {} ({} keys)",
            path.display(),
            entries.len()
        );

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let body = serde_json::to_string_pretty(entries).map_err(|source| StorageError::Encode {
            key: self.path.display().to_string(),
            source,
        })?;

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, body).await?;
        tokio::fs::rename(&tmp, &self.path).await?;

        debug!("Flushed {} keys to {}", entries.len(), self.path.display());
        Ok(())
    }
}

#[async_trait]
impl StorageBackend for FileBackend {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().await;
        entries.insert(key.to_string(), value);
        self.persist(&entries).await
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().await;
        if entries.remove(key).is_some() {
            self.persist(&entries).await?;
        }
        Ok(())
    }
}
