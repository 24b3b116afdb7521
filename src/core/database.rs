use std::sync::Arc;

use crate::core::config::StorageConfig;
use crate::modules::storage::{
    ContentStore, FileBackend, MemoryBackend, StorageBackend, StorageError,
};

/// Build the content store described by `config`
pub async fn create_store(config: &StorageConfig) -> Result<ContentStore, StorageError> {
    let backend: Arc<dyn StorageBackend> = match &config.data_file {
        Some(path) => {
            let backend = FileBackend::open(path).await?;
            tracing::info!("Site content stored in {}", backend.path().display());
            Arc::new(backend)
        }
        None => {
            tracing::warn!("DATA_FILE is empty; site content will not survive a restart");
            Arc::new(MemoryBackend::new())
        }
    };

    Ok(ContentStore::new(backend, config.latency))
}
