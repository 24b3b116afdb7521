//! Storage module for site content
//!
//! Provides a flat key-value backend (in-memory or a single JSON file on
//! disk) and the [`ContentStore`] that keeps each collection as one JSON
//! blob under a fixed key.

mod backend;
mod content_store;
mod error;
mod file_backend;

pub use backend::{MemoryBackend, StorageBackend};
pub use content_store::{new_record_id, ContentStore, Record};
pub use error::StorageError;
pub use file_backend::FileBackend;
