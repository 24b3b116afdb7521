//! Collection-level persistence over a [`StorageBackend`]
//!
//! Each collection is one JSON array stored under a fixed key. Reads fall
//! back to the collection's seed data (and write it) when the key is absent.
//! Writes are whole-collection overwrites: save-one scans by key and either
//! replaces in place or appends; delete-one filters and overwrites.
//!
//! Every public operation waits a fixed artificial latency first. Single
//! lookups wait half of it, message submission three times it.

use std::sync::Arc;
use std::time::Duration;

use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

use super::{StorageBackend, StorageError};

/// A record kept in a keyed collection
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Storage key of the collection
    const COLLECTION: &'static str;

    /// Value used by save-one/delete-one to locate this record
    fn record_key(&self) -> &str;

    /// Initial contents written on first access
    fn seed() -> Vec<Self>;
}

/// Fresh identifier for a record created through the API
pub fn new_record_id() -> String {
    Uuid::new_v4().simple().to_string()
}

pub struct ContentStore {
    backend: Arc<dyn StorageBackend>,
    latency: Duration,
    /// Serializes read-modify-write sequences
    write_lock: Mutex<()>,
}

impl ContentStore {
    pub fn new(backend: Arc<dyn StorageBackend>, latency: Duration) -> Self {
        Self {
            backend,
            latency,
            write_lock: Mutex::new(()),
        }
    }

    async fn pause(&self, duration: Duration) {
        if !duration.is_zero() {
            tokio::time::sleep(duration).await;
        }
    }

    /// Read `key`, writing and returning `seed` when it has never been set.
    ///
    /// Seeding happens under the write lock, so it never overwrites a record
    /// saved concurrently into a fresh collection.
    pub async fn load<T, F>(&self, key: &str, seed: F) -> Result<T, StorageError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> T,
    {
        if let Some(raw) = self.backend.get(key).await? {
            return decode(key, &raw);
        }

        let _guard = self.write_lock.lock().await;
        self.load_locked(key, seed).await
    }

    /// [`Self::load`] for callers already holding the write lock
    async fn load_locked<T, F>(&self, key: &str, seed: F) -> Result<T, StorageError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> T,
    {
        match self.backend.get(key).await? {
            Some(raw) => decode(key, &raw),
            None => {
                let initial = seed();
                self.save(key, &initial).await?;
                debug!("Seeded storage key '{}'", key);
                Ok(initial)
            }
        }
    }

    /// Overwrite `key` with the JSON encoding of `data`
    pub async fn save<T: Serialize>(&self, key: &str, data: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(data).map_err(|source| StorageError::Encode {
            key: key.to_string(),
            source,
        })?;
        self.backend.set(key, raw).await
    }

    pub async fn get_all<R: Record>(&self) -> Result<Vec<R>, StorageError> {
        self.pause(self.latency).await;
        self.load(R::COLLECTION, R::seed).await
    }

    pub async fn find_one<R: Record>(&self, key: &str) -> Result<Option<R>, StorageError> {
        self.pause(self.latency / 2).await;
        let list: Vec<R> = self.load(R::COLLECTION, R::seed).await?;
        Ok(list.into_iter().find(|r| r.record_key() == key))
    }

    /// Replace the record with the same key, or append it
    pub async fn save_one<R: Record>(&self, record: R) -> Result<R, StorageError> {
        self.save_one_with(record, |_, incoming| incoming).await
    }

    /// Like [`Self::save_one`], but an existing record is combined with the
    /// incoming one through `merge(existing, incoming)` before it is stored
    pub async fn save_one_with<R, F>(&self, record: R, merge: F) -> Result<R, StorageError>
    where
        R: Record,
        F: FnOnce(&R, R) -> R + Send,
    {
        self.save_one_checked(record, |_, _| Ok::<(), StorageError>(()), merge)
            .await
    }

    /// Save-one with a precondition.
    ///
    /// `check(collection, incoming)` runs under the write lock against the
    /// current collection; an error aborts the save and leaves storage as is.
    pub async fn save_one_checked<R, E, C, F>(
        &self,
        record: R,
        check: C,
        merge: F,
    ) -> Result<R, E>
    where
        R: Record,
        E: From<StorageError>,
        C: FnOnce(&[R], &R) -> Result<(), E> + Send,
        F: FnOnce(&R, R) -> R + Send,
    {
        self.pause(self.latency).await;
        let _guard = self.write_lock.lock().await;

        let mut list: Vec<R> = self.load_locked(R::COLLECTION, R::seed).await?;
        check(&list, &record)?;

        let stored = match list
            .iter()
            .position(|r| r.record_key() == record.record_key())
        {
            Some(index) => {
                let merged = merge(&list[index], record);
                list[index] = merged.clone();
                merged
            }
            None => {
                list.push(record.clone());
                record
            }
        };

        self.save(R::COLLECTION, &list).await?;
        Ok(stored)
    }

    /// Change the record with `key` in place; never appends.
    ///
    /// Returns `None` when no record matched. An error from `change` aborts
    /// the write.
    pub async fn update_one<R, E, F>(&self, key: &str, change: F) -> Result<Option<R>, E>
    where
        R: Record,
        E: From<StorageError>,
        F: FnOnce(&mut R) -> Result<(), E> + Send,
    {
        self.pause(self.latency).await;
        let _guard = self.write_lock.lock().await;

        let mut list: Vec<R> = self.load_locked(R::COLLECTION, R::seed).await?;
        let Some(record) = list.iter_mut().find(|r| r.record_key() == key) else {
            return Ok(None);
        };

        change(record)?;
        let updated = record.clone();

        self.save(R::COLLECTION, &list).await?;
        Ok(Some(updated))
    }

    /// Remove the record with `key`; returns false when nothing matched
    pub async fn delete_one<R: Record>(&self, key: &str) -> Result<bool, StorageError> {
        self.pause(self.latency).await;
        let _guard = self.write_lock.lock().await;

        let list: Vec<R> = self.load_locked(R::COLLECTION, R::seed).await?;
        let before = list.len();
        let remaining: Vec<R> = list.into_iter().filter(|r| r.record_key() != key).collect();

        if remaining.len() == before {
            return Ok(false);
        }

        self.save(R::COLLECTION, &remaining).await?;
        Ok(true)
    }

    /// Append without a key scan (contact submissions)
    pub async fn append<R: Record>(&self, record: R) -> Result<R, StorageError> {
        self.pause(self.latency * 3).await;
        let _guard = self.write_lock.lock().await;

        let mut list: Vec<R> = self.load_locked(R::COLLECTION, R::seed).await?;
        list.push(record.clone());
        self.save(R::COLLECTION, &list).await?;
        Ok(record)
    }

    /// Read a standalone value (no seeding, no latency)
    pub async fn get_value<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match self.backend.get(key).await? {
            Some(raw) => decode(key, &raw).map(Some),
            None => Ok(None),
        }
    }

    pub async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.backend.remove(key).await
    }
}

fn decode<T: DeserializeOwned>(key: &str, raw: &str) -> Result<T, StorageError> {
    serde_json::from_str(raw).map_err(|source| StorageError::Corrupt {
        key: key.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;
    use crate::modules::storage::MemoryBackend;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Note {
        id: String,
        body: String,
    }

    impl Record for Note {
        const COLLECTION: &'static str = "notes";

        fn record_key(&self) -> &str {
            &self.id
        }

        fn seed() -> Vec<Self> {
            vec![note("n1", "seeded")]
        }
    }

    fn note(id: &str, body: &str) -> Note {
        Note {
            id: id.to_string(),
            body: body.to_string(),
        }
    }

    fn store() -> (Arc<MemoryBackend>, ContentStore) {
        let backend = Arc::new(MemoryBackend::new());
        let store = ContentStore::new(backend.clone(), Duration::ZERO);
        (backend, store)
    }

    #[tokio::test]
    async fn test_first_read_writes_seed() {
        let (backend, store) = store();
        assert!(backend.get("notes").await.unwrap().is_none());

        let notes: Vec<Note> = store.get_all().await.unwrap();
        assert_eq!(notes, vec![note("n1", "seeded")]);
        assert!(backend.get("notes").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_empty_collection_is_not_reseeded() {
        let (backend, store) = store();
        backend.set("notes", "[]".to_string()).await.unwrap();

        let notes: Vec<Note> = store.get_all().await.unwrap();
        assert!(notes.is_empty());
    }

    #[tokio::test]
    async fn test_save_one_replaces_in_place_or_appends() {
        let (_, store) = store();
        store.save_one(note("n2", "second")).await.unwrap();
        store.save_one(note("n1", "edited")).await.unwrap();

        let notes: Vec<Note> = store.get_all().await.unwrap();
        assert_eq!(notes, vec![note("n1", "edited"), note("n2", "second")]);
    }

    #[tokio::test]
    async fn test_save_one_with_merges_existing() {
        let (_, store) = store();
        let stored = store
            .save_one_with(note("n1", ""), |existing, mut incoming| {
                if incoming.body.is_empty() {
                    incoming.body = existing.body.clone();
                }
                incoming
            })
            .await
            .unwrap();

        assert_eq!(stored.body, "seeded");
    }

    #[tokio::test]
    async fn test_delete_one_reports_missing() {
        let (_, store) = store();
        assert!(store.delete_one::<Note>("n1").await.unwrap());
        assert!(!store.delete_one::<Note>("n1").await.unwrap());

        let notes: Vec<Note> = store.get_all().await.unwrap();
        assert!(notes.is_empty());
    }

    #[tokio::test]
    async fn test_find_one_and_append() {
        let (_, store) = store();
        store.append(note("n9", "appended")).await.unwrap();

        let found: Option<Note> = store.find_one("n9").await.unwrap();
        assert_eq!(found, Some(note("n9", "appended")));
        assert!(store.find_one::<Note>("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_corrupt_collection_is_an_error() {
        let (backend, store) = store();
        backend.set("notes", "{oops".to_string()).await.unwrap();

        let result = store.get_all::<Note>().await;
        assert!(matches!(result, Err(StorageError::Corrupt { .. })));
    }

    #[tokio::test]
    async fn test_update_one_never_appends() {
        let (_, store) = store();

        let missing = store
            .update_one::<Note, StorageError, _>("n2", |n| {
                n.body = "changed".to_string();
                Ok(())
            })
            .await
            .unwrap();
        assert!(missing.is_none());

        let updated = store
            .update_one::<Note, StorageError, _>("n1", |n| {
                n.body.push_str("!");
                Ok(())
            })
            .await
            .unwrap();
        assert_eq!(updated, Some(note("n1", "seeded!")));

        let notes: Vec<Note> = store.get_all().await.unwrap();
        assert_eq!(notes, vec![note("n1", "seeded!")]);
    }

    #[tokio::test]
    async fn test_update_racing_delete_does_not_resurrect() {
        let store = ContentStore::new(Arc::new(MemoryBackend::new()), Duration::from_millis(20));

        let (updated, deleted) = tokio::join!(
            store.update_one::<Note, StorageError, _>("n1", |n| {
                n.body = "late edit".to_string();
                Ok(())
            }),
            async {
                tokio::time::sleep(Duration::from_millis(5)).await;
                store.delete_one::<Note>("n1").await
            }
        );

        tokio_test::assert_ok!(updated);
        assert!(deleted.unwrap());
        assert!(store.find_one::<Note>("n1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_one_checked_sees_concurrent_saves() {
        let store = ContentStore::new(Arc::new(MemoryBackend::new()), Duration::from_millis(20));
        let unique_body = |list: &[Note], incoming: &Note| {
            if list.iter().any(|n| n.body == incoming.body) {
                return Err(StorageError::Io(std::io::Error::other("duplicate")));
            }
            Ok(())
        };

        let (a, b) = tokio::join!(
            store.save_one_checked(note("a", "same"), unique_body, |_, n| n),
            store.save_one_checked(note("b", "same"), unique_body, |_, n| n)
        );

        assert!(a.is_ok() != b.is_ok());
        let notes: Vec<Note> = store.get_all().await.unwrap();
        assert_eq!(notes.iter().filter(|n| n.body == "same").count(), 1);
    }

    #[tokio::test]
    async fn test_first_reads_do_not_clobber_concurrent_save() {
        let store = ContentStore::new(Arc::new(MemoryBackend::new()), Duration::from_millis(5));

        let (first, saved, second) = tokio::join!(
            store.get_all::<Note>(),
            store.save_one(note("n2", "fresh")),
            store.get_all::<Note>()
        );
        tokio_test::assert_ok!(first);
        tokio_test::assert_ok!(saved);
        tokio_test::assert_ok!(second);

        let notes: Vec<Note> = store.get_all().await.unwrap();
        assert_eq!(notes, vec![note("n1", "seeded"), note("n2", "fresh")]);
    }
}
