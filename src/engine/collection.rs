//! Per-collection synchronizer state.
//!
//! Each [`CollectionState`] mirrors one remote collection: it seeds defaults
//! into an empty collection, ingests live snapshots into a local ordered
//! list, and converges the remote store toward setter-supplied lists with
//! the minimal set of upsert/delete writes.

use super::Update;
use crate::current_timestamp_millis;
use crate::models::ContentRecord;
use crate::storage::{Document, DocumentId, DocumentStore, Snapshot};
use futures::future::join_all;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, error, warn};

/// One remote write derived from a setter diff.
enum WriteOp {
    /// Create-if-absent-else-overwrite, keyed by application id.
    Upsert { id: i64, fields: Value },
    /// Remove the document holding this application id.
    Delete { id: i64 },
}

/// Local mirror of one remote collection.
pub(super) struct CollectionState<T: ContentRecord> {
    store: Arc<dyn DocumentStore>,
    defaults: Vec<T>,
    mirror: Arc<RwLock<Vec<T>>>,
    /// Application id to store locator, rebuilt from every snapshot and kept
    /// current across creates so upserts never rescan the collection.
    locators: Arc<RwLock<HashMap<i64, DocumentId>>>,
    loaded: Arc<AtomicBool>,
    listener: Mutex<Option<JoinHandle<()>>>,
}

impl<T: ContentRecord> CollectionState<T> {
    pub(super) fn new(store: Arc<dyn DocumentStore>, defaults: Vec<T>) -> Self {
        Self {
            store,
            defaults,
            mirror: Arc::new(RwLock::new(Vec::new())),
            locators: Arc::new(RwLock::new(HashMap::new())),
            loaded: Arc::new(AtomicBool::new(false)),
            listener: Mutex::new(None),
        }
    }

    /// Seeds defaults into an empty remote collection, then starts the live
    /// snapshot listener. All failures are absorbed: when the subscription
    /// cannot be established the mirror falls back to the static defaults so
    /// consumers never render an empty state.
    pub(super) async fn initialize(&self) {
        self.seed_if_empty().await;

        match self.store.subscribe(T::COLLECTION).await {
            Ok(snapshots) => self.spawn_listener(snapshots),
            Err(error) => {
                error!(
                    collection = %T::COLLECTION,
                    %error,
                    "subscription failed, serving bundled defaults"
                );
                self.replace_mirror(self.defaults.clone(), HashMap::new());
                self.loaded.store(true, Ordering::SeqCst);
            }
        }
    }

    async fn seed_if_empty(&self) {
        match self.store.fetch_all(T::COLLECTION).await {
            Ok(docs) if docs.is_empty() && !self.defaults.is_empty() => {
                debug!(
                    collection = %T::COLLECTION,
                    count = self.defaults.len(),
                    "seeding empty collection with defaults"
                );
                self.write_defaults().await;
            }
            Ok(_) => {}
            Err(error) => {
                error!(collection = %T::COLLECTION, %error, "initial fetch failed");
            }
        }
    }

    /// Writes every default item as a new document. One create per item, no
    /// transaction: a partial failure leaves a partially-seeded collection,
    /// which the next empty-check run completes.
    async fn write_defaults(&self) {
        let creates = self.defaults.iter().map(|item| {
            let store = Arc::clone(&self.store);
            async move {
                let fields = serde_json::to_value(item)?;
                store.create(T::COLLECTION, fields).await
            }
        });
        for result in join_all(creates).await {
            if let Err(error) = result {
                error!(collection = %T::COLLECTION, %error, "failed to seed default record");
            }
        }
    }

    fn spawn_listener(&self, mut snapshots: crate::storage::Snapshots) {
        let mirror = Arc::clone(&self.mirror);
        let locators = Arc::clone(&self.locators);
        let loaded = Arc::clone(&self.loaded);
        let handle = tokio::spawn(async move {
            while let Some(snapshot) = snapshots.next().await {
                let (items, index) = ingest::<T>(&snapshot);
                *locators.write().unwrap_or_else(PoisonError::into_inner) = index;
                *mirror.write().unwrap_or_else(PoisonError::into_inner) = items;
                loaded.store(true, Ordering::SeqCst);
            }
            debug!(collection = %T::COLLECTION, "snapshot stream closed");
        });
        let mut listener = self.listener.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = listener.replace(handle) {
            previous.abort();
        }
    }

    fn replace_mirror(&self, items: Vec<T>, index: HashMap<i64, DocumentId>) {
        *self
            .locators
            .write()
            .unwrap_or_else(PoisonError::into_inner) = index;
        *self.mirror.write().unwrap_or_else(PoisonError::into_inner) = items;
    }

    /// Returns a copy of the current mirror.
    pub(super) fn items(&self) -> Vec<T> {
        self.mirror
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Whether the first snapshot (or the defaults fallback) has landed.
    pub(super) fn loaded(&self) -> bool {
        self.loaded.load(Ordering::SeqCst)
    }

    /// Adopts the new desired list optimistically and schedules the remote
    /// writes that converge the store toward it.
    ///
    /// Returns synchronously; the caller never blocks on remote I/O. Writes
    /// are issued concurrently with no ordering guarantee, failures are
    /// logged and absorbed, and the optimistic mirror is never rolled back.
    /// The next authoritative snapshot is the correction mechanism.
    ///
    /// Functional updates are resolved before the mirror lock is taken, so
    /// the closure may read back into the engine.
    pub(super) fn set(&self, update: Update<T>) {
        let prev = self.items();
        let resolved = update.resolve(&prev);
        let ops = {
            let mut mirror = self.mirror.write().unwrap_or_else(PoisonError::into_inner);
            let ops = diff(&mirror, &resolved);
            *mirror = resolved;
            ops
        };
        if !ops.is_empty() {
            self.spawn_writes(ops);
        }
    }

    fn spawn_writes(&self, ops: Vec<WriteOp>) {
        let store = Arc::clone(&self.store);
        let locators = Arc::clone(&self.locators);
        tokio::spawn(async move {
            let writes = ops.into_iter().map(|op| {
                let store = Arc::clone(&store);
                let locators = Arc::clone(&locators);
                async move {
                    match op {
                        WriteOp::Upsert { id, fields } => {
                            upsert::<T>(&store, &locators, id, fields).await;
                        }
                        WriteOp::Delete { id } => {
                            remove::<T>(&store, &locators, id).await;
                        }
                    }
                }
            });
            join_all(writes).await;
        });
    }

    /// Deletes every document in the remote collection and rewrites the full
    /// default list. Disaster-recovery path, not part of the normal flow.
    pub(super) async fn reset_to_defaults(&self) {
        match self.store.fetch_all(T::COLLECTION).await {
            Ok(docs) => {
                let deletes = docs.iter().map(|doc| {
                    let store = Arc::clone(&self.store);
                    async move { store.delete(T::COLLECTION, &doc.locator).await }
                });
                for result in join_all(deletes).await {
                    if let Err(error) = result {
                        error!(collection = %T::COLLECTION, %error, "reset delete failed");
                    }
                }
            }
            Err(error) => {
                error!(collection = %T::COLLECTION, %error, "reset fetch failed");
                return;
            }
        }
        self.write_defaults().await;
    }

    /// Tears down the snapshot listener. In-flight writes are not cancelled.
    pub(super) fn shutdown(&self) {
        let mut listener = self.listener.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(handle) = listener.take() {
            handle.abort();
        }
    }
}

impl<T: ContentRecord> Drop for CollectionState<T> {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Maps an authoritative snapshot into the mirror shape: decoded records
/// sorted by descending id (newest first, approximately) plus the rebuilt
/// id-to-locator index. Malformed documents are skipped with a warning
/// instead of propagating arbitrary shapes to consumers.
fn ingest<T: ContentRecord>(snapshot: &Snapshot) -> (Vec<T>, HashMap<i64, DocumentId>) {
    let mut items = Vec::with_capacity(snapshot.len());
    let mut index = HashMap::with_capacity(snapshot.len());
    for doc in snapshot {
        match decode::<T>(doc) {
            Some(record) => {
                index.insert(record.id(), doc.locator.clone());
                items.push(record);
            }
            None => {
                warn!(
                    collection = %T::COLLECTION,
                    locator = %doc.locator,
                    "skipping malformed remote document"
                );
            }
        }
    }
    items.sort_by_key(|record| std::cmp::Reverse(record.id()));
    (items, index)
}

/// Decodes one remote document. Ids come from the `id` field when present,
/// else from a numeric locator, else from the clock.
fn decode<T: ContentRecord>(doc: &Document) -> Option<T> {
    let record: T = serde_json::from_value(doc.fields.clone()).ok()?;
    if record.id() != 0 {
        return Some(record);
    }
    let fallback = doc
        .locator
        .as_str()
        .parse()
        .unwrap_or_else(|_| current_timestamp_millis());
    Some(record.with_id(fallback))
}

/// Computes the writes needed to converge the remote collection from `prev`
/// to `next`. Equality is whole-record structural comparison via
/// serialization; any changed field rewrites the full record.
fn diff<T: ContentRecord>(prev: &[T], next: &[T]) -> Vec<WriteOp> {
    let mut ops = Vec::new();

    for item in next {
        let fields = match serde_json::to_value(item) {
            Ok(fields) => fields,
            Err(error) => {
                error!(collection = %T::COLLECTION, id = item.id(), %error, "record not serializable");
                continue;
            }
        };
        let unchanged = prev
            .iter()
            .find(|p| p.id() == item.id())
            .is_some_and(|p| serde_json::to_value(p).is_ok_and(|prev_fields| prev_fields == fields));
        if !unchanged {
            ops.push(WriteOp::Upsert {
                id: item.id(),
                fields,
            });
        }
    }

    let next_ids: HashSet<i64> = next.iter().map(ContentRecord::id).collect();
    for item in prev {
        if !next_ids.contains(&item.id()) {
            ops.push(WriteOp::Delete { id: item.id() });
        }
    }

    ops
}

async fn upsert<T: ContentRecord>(
    store: &Arc<dyn DocumentStore>,
    locators: &Arc<RwLock<HashMap<i64, DocumentId>>>,
    id: i64,
    fields: Value,
) {
    let known = locators
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&id)
        .cloned();
    let result = match known {
        Some(locator) => store.update(T::COLLECTION, &locator, fields).await,
        None => match store.create(T::COLLECTION, fields).await {
            Ok(locator) => {
                locators
                    .write()
                    .unwrap_or_else(PoisonError::into_inner)
                    .insert(id, locator);
                Ok(())
            }
            Err(error) => Err(error),
        },
    };
    if let Err(error) = result {
        error!(
            collection = %T::COLLECTION,
            id,
            %error,
            "upsert failed, mirror stays optimistic until the next snapshot"
        );
    }
}

async fn remove<T: ContentRecord>(
    store: &Arc<dyn DocumentStore>,
    locators: &Arc<RwLock<HashMap<i64, DocumentId>>>,
    id: i64,
) {
    let known = locators
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .remove(&id);
    match known {
        Some(locator) => {
            if let Err(error) = store.delete(T::COLLECTION, &locator).await {
                error!(collection = %T::COLLECTION, id, %error, "delete failed");
            }
        }
        None => {
            warn!(collection = %T::COLLECTION, id, "no locator for removed record");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Review;
    use serde_json::json;

    fn doc(locator: &str, fields: Value) -> Document {
        Document::new(locator, fields)
    }

    #[test]
    fn test_decode_uses_id_field() {
        let review: Review = decode(&doc("500", json!({ "id": 7, "name": "A" }))).unwrap();
        assert_eq!(review.id, 7);
    }

    #[test]
    fn test_decode_falls_back_to_locator() {
        let review: Review = decode(&doc("500", json!({ "name": "A" }))).unwrap();
        assert_eq!(review.id, 500);
    }

    #[test]
    fn test_decode_falls_back_to_timestamp() {
        let review: Review = decode(&doc("doc-abc", json!({ "name": "A" }))).unwrap();
        // Not parseable as a number, so the id comes from the clock.
        assert!(review.id > 1_577_836_800_000);
    }

    #[test]
    fn test_decode_rejects_malformed_document() {
        assert!(decode::<Review>(&doc("1", json!("not an object"))).is_none());
    }

    #[test]
    fn test_ingest_sorts_descending_and_indexes_locators() {
        let snapshot = vec![
            doc("a", json!({ "id": 1, "name": "old" })),
            doc("b", json!({ "id": 3, "name": "new" })),
            doc("c", json!({ "id": 2, "name": "mid" })),
        ];
        let (items, index) = ingest::<Review>(&snapshot);
        let ids: Vec<i64> = items.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
        assert_eq!(index[&3], DocumentId::new("b"));
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn test_ingest_skips_malformed_documents() {
        let snapshot = vec![
            doc("a", json!({ "id": 1, "name": "ok" })),
            doc("b", json!(42)),
        ];
        let (items, index) = ingest::<Review>(&snapshot);
        assert_eq!(items.len(), 1);
        assert_eq!(index.len(), 1);
    }

    fn review(id: i64, name: &str) -> Review {
        Review {
            id,
            name: name.to_string(),
            rating: 5,
            ..Review::default()
        }
    }

    #[test]
    fn test_diff_identical_lists_is_empty() {
        let prev = vec![review(1, "a"), review(2, "b")];
        let ops = diff(&prev, &prev.clone());
        assert!(ops.is_empty());
    }

    #[test]
    fn test_diff_new_record_is_one_upsert() {
        let prev = vec![review(1, "a")];
        let next = vec![review(1, "a"), review(2, "b")];
        let ops = diff(&prev, &next);
        assert_eq!(ops.len(), 1);
        assert!(matches!(ops[0], WriteOp::Upsert { id: 2, .. }));
    }

    #[test]
    fn test_diff_removed_record_is_one_delete() {
        let prev = vec![review(1, "a"), review(2, "b")];
        let next = vec![review(1, "a")];
        let ops = diff(&prev, &next);
        assert_eq!(ops.len(), 1);
        assert!(matches!(ops[0], WriteOp::Delete { id: 2 }));
    }

    #[test]
    fn test_diff_changed_record_is_one_upsert() {
        let prev = vec![review(1, "a"), review(2, "b")];
        let next = vec![review(1, "a"), review(2, "b-edited")];
        let ops = diff(&prev, &next);
        assert_eq!(ops.len(), 1);
        assert!(matches!(ops[0], WriteOp::Upsert { id: 2, .. }));
    }
}
