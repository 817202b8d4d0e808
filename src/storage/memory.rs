//! In-memory storage backends.
//!
//! [`MemoryStore`] is the reference [`DocumentStore`] implementation: it
//! mimics the hosted store's behavior (locator assignment, full-snapshot
//! notifications on every change) and adds call counters plus write-fault
//! injection so synchronizer behavior can be asserted precisely in tests.
//! [`MemoryKeyValueStore`] is the matching [`KeyValueStore`].

use super::traits::{Document, DocumentId, DocumentStore, KeyValueStore, Snapshot, Snapshots};
use crate::models::Collection;
use crate::{Error, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};
use tokio::sync::broadcast;

/// Per-collection write call counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpCounts {
    /// Number of `create` calls.
    pub creates: usize,
    /// Number of `update` calls.
    pub updates: usize,
    /// Number of `delete` calls.
    pub deletes: usize,
}

impl OpCounts {
    /// Total number of write calls.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.creates + self.updates + self.deletes
    }
}

/// Capacity of each collection's snapshot broadcast channel.
///
/// Laggards skip ahead to the newest snapshot, so a small buffer suffices.
const SNAPSHOT_CHANNEL_CAPACITY: usize = 16;

/// In-memory [`DocumentStore`].
pub struct MemoryStore {
    collections: Mutex<HashMap<Collection, BTreeMap<DocumentId, Value>>>,
    senders: Mutex<HashMap<Collection, broadcast::Sender<Snapshot>>>,
    counts: Mutex<HashMap<Collection, OpCounts>>,
    next_locator: AtomicU64,
    fail_next_writes: AtomicUsize,
    fail_next_subscribes: AtomicUsize,
}

impl MemoryStore {
    /// Builds an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            collections: Mutex::new(HashMap::new()),
            senders: Mutex::new(HashMap::new()),
            counts: Mutex::new(HashMap::new()),
            next_locator: AtomicU64::new(1),
            fail_next_writes: AtomicUsize::new(0),
            fail_next_subscribes: AtomicUsize::new(0),
        }
    }

    /// Makes the next `count` write calls (create/update/delete) fail with a
    /// simulated network error.
    pub fn fail_next_writes(&self, count: usize) {
        self.fail_next_writes.fetch_add(count, Ordering::SeqCst);
    }

    /// Makes the next `count` `subscribe` calls fail with a simulated
    /// network error.
    pub fn fail_next_subscribes(&self, count: usize) {
        self.fail_next_subscribes.fetch_add(count, Ordering::SeqCst);
    }

    /// Returns the write call counts recorded for `collection`.
    #[must_use]
    pub fn op_counts(&self, collection: Collection) -> OpCounts {
        self.counts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&collection)
            .copied()
            .unwrap_or_default()
    }

    /// Clears all recorded write call counts.
    pub fn reset_op_counts(&self) {
        self.counts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Returns the number of documents currently in `collection`.
    #[must_use]
    pub fn len(&self, collection: Collection) -> usize {
        self.collections
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&collection)
            .map_or(0, BTreeMap::len)
    }

    /// Returns `true` when `collection` holds no documents.
    #[must_use]
    pub fn is_empty(&self, collection: Collection) -> bool {
        self.len(collection) == 0
    }

    fn take_fault(counter: &AtomicUsize, operation: &str) -> Result<()> {
        let armed = counter
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if armed {
            return Err(Error::operation(operation, "injected network failure"));
        }
        Ok(())
    }

    fn take_injected_fault(&self, operation: &str) -> Result<()> {
        Self::take_fault(&self.fail_next_writes, operation)
    }

    fn record(&self, collection: Collection, f: impl FnOnce(&mut OpCounts)) {
        let mut counts = self.counts.lock().unwrap_or_else(PoisonError::into_inner);
        f(counts.entry(collection).or_default());
    }

    fn snapshot_of(docs: &BTreeMap<DocumentId, Value>) -> Snapshot {
        docs.iter()
            .map(|(locator, fields)| Document::new(locator.clone(), fields.clone()))
            .collect()
    }

    fn notify(&self, collection: Collection, snapshot: Snapshot) {
        let senders = self.senders.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(sender) = senders.get(&collection) {
            // No receivers is fine.
            let _ = sender.send(snapshot);
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn fetch_all(&self, collection: Collection) -> Result<Vec<Document>> {
        let collections = self
            .collections
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(collections
            .get(&collection)
            .map(Self::snapshot_of)
            .unwrap_or_default())
    }

    async fn create(&self, collection: Collection, fields: Value) -> Result<DocumentId> {
        self.take_injected_fault("create")?;
        let locator = DocumentId::new(
            self.next_locator
                .fetch_add(1, Ordering::SeqCst)
                .to_string(),
        );
        let snapshot = {
            let mut collections = self
                .collections
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            let docs = collections.entry(collection).or_default();
            docs.insert(locator.clone(), fields);
            Self::snapshot_of(docs)
        };
        self.record(collection, |c| c.creates += 1);
        self.notify(collection, snapshot);
        Ok(locator)
    }

    async fn update(
        &self,
        collection: Collection,
        locator: &DocumentId,
        fields: Value,
    ) -> Result<()> {
        self.take_injected_fault("update")?;
        let snapshot = {
            let mut collections = self
                .collections
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            let docs = collections
                .get_mut(&collection)
                .ok_or_else(|| Error::NotFound(format!("collection '{collection}'")))?;
            let slot = docs
                .get_mut(locator)
                .ok_or_else(|| Error::NotFound(format!("{collection}/{locator}")))?;
            *slot = fields;
            Self::snapshot_of(docs)
        };
        self.record(collection, |c| c.updates += 1);
        self.notify(collection, snapshot);
        Ok(())
    }

    async fn delete(&self, collection: Collection, locator: &DocumentId) -> Result<()> {
        self.take_injected_fault("delete")?;
        let snapshot = {
            let mut collections = self
                .collections
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            let docs = collections
                .get_mut(&collection)
                .ok_or_else(|| Error::NotFound(format!("collection '{collection}'")))?;
            docs.remove(locator)
                .ok_or_else(|| Error::NotFound(format!("{collection}/{locator}")))?;
            Self::snapshot_of(docs)
        };
        self.record(collection, |c| c.deletes += 1);
        self.notify(collection, snapshot);
        Ok(())
    }

    async fn subscribe(&self, collection: Collection) -> Result<Snapshots> {
        Self::take_fault(&self.fail_next_subscribes, "subscribe")?;
        let initial = {
            let collections = self
                .collections
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            collections
                .get(&collection)
                .map(Self::snapshot_of)
                .unwrap_or_default()
        };
        let rx = {
            let mut senders = self.senders.lock().unwrap_or_else(PoisonError::into_inner);
            senders
                .entry(collection)
                .or_insert_with(|| broadcast::channel(SNAPSHOT_CHANNEL_CAPACITY).0)
                .subscribe()
        };
        Ok(Snapshots::new(Some(initial), rx))
    }
}

/// In-memory [`KeyValueStore`], the test stand-in for browser local storage.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    /// Builds an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_create_fetch_update_delete() {
        let store = MemoryStore::new();
        let collection = Collection::Projects;

        let locator = store
            .create(collection, json!({ "id": 1, "title": "a" }))
            .await
            .unwrap();
        assert_eq!(store.len(collection), 1);

        store
            .update(collection, &locator, json!({ "id": 1, "title": "b" }))
            .await
            .unwrap();
        let docs = store.fetch_all(collection).await.unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].fields["title"], json!("b"));

        store.delete(collection, &locator).await.unwrap();
        assert!(store.is_empty(collection));

        let counts = store.op_counts(collection);
        assert_eq!(counts.creates, 1);
        assert_eq!(counts.updates, 1);
        assert_eq!(counts.deletes, 1);
    }

    #[tokio::test]
    async fn test_update_missing_document_is_not_found() {
        let store = MemoryStore::new();
        let err = store
            .update(Collection::Reviews, &DocumentId::new("99"), json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn test_subscribe_delivers_initial_then_changes() {
        let store = MemoryStore::new();
        let collection = Collection::Articles;
        store
            .create(collection, json!({ "id": 1 }))
            .await
            .unwrap();

        let mut snapshots = store.subscribe(collection).await.unwrap();
        let initial = snapshots.next().await.unwrap();
        assert_eq!(initial.len(), 1);

        store
            .create(collection, json!({ "id": 2 }))
            .await
            .unwrap();
        let next = snapshots.next().await.unwrap();
        assert_eq!(next.len(), 2);
    }

    #[tokio::test]
    async fn test_injected_fault_fails_one_write() {
        let store = MemoryStore::new();
        store.fail_next_writes(1);

        let err = store
            .create(Collection::Agents, json!({ "id": 1 }))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("injected network failure"));

        // The fault is consumed; the next write succeeds.
        store
            .create(Collection::Agents, json!({ "id": 1 }))
            .await
            .unwrap();
        assert_eq!(store.len(Collection::Agents), 1);
    }

    #[tokio::test]
    async fn test_injected_subscribe_fault_fails_once() {
        let store = MemoryStore::new();
        store.fail_next_subscribes(1);

        let err = store.subscribe(Collection::Reviews).await.unwrap_err();
        assert!(err.to_string().contains("injected network failure"));

        // The fault is consumed; the next subscription succeeds.
        store.subscribe(Collection::Reviews).await.unwrap();
    }

    #[test]
    fn test_key_value_store_round_trip() {
        let store = MemoryKeyValueStore::new();
        assert_eq!(store.load("k").unwrap(), None);
        store.save("k", "v").unwrap();
        assert_eq!(store.load("k").unwrap(), Some("v".to_string()));
        store.remove("k").unwrap();
        assert_eq!(store.load("k").unwrap(), None);
    }
}
