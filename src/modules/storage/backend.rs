use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::StorageError;

/// Flat string key-value storage, one value per key
#[async_trait]
pub trait StorageBackend: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError>;

    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Process-local backend; contents are lost on restart
#[derive(Default)]
pub struct MemoryBackend {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StorageBackend for MemoryBackend {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_backend_set_get_remove() {
        let backend = MemoryBackend::new();
        assert_eq!(backend.get("pages").await.unwrap(), None);

        backend.set("pages", "[]".to_string()).await.unwrap();
        assert_eq!(backend.get("pages").await.unwrap().as_deref(), Some("[]"));

        backend.remove("pages").await.unwrap();
        assert_eq!(backend.get("pages").await.unwrap(), None);
    }
}
