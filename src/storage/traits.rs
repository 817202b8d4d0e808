//! Storage traits: the remote document store and the key-value seam.

use crate::Result;
use crate::models::Collection;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use tokio::sync::broadcast;

/// Store-assigned physical locator for a document.
///
/// Distinct from the application-level numeric id carried inside the
/// document's fields; the locator is whatever handle the backing store
/// assigned when the document was created.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    /// Creates a new document id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for DocumentId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for DocumentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// One document in a remote collection: its locator plus its raw fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Store-assigned locator.
    pub locator: DocumentId,
    /// Raw document fields as stored.
    pub fields: Value,
}

impl Document {
    /// Creates a document from a locator and raw fields.
    #[must_use]
    pub fn new(locator: impl Into<DocumentId>, fields: Value) -> Self {
        Self {
            locator: locator.into(),
            fields,
        }
    }
}

/// The full contents of a collection at a point in time.
pub type Snapshot = Vec<Document>;

/// Receiver of live collection snapshots.
///
/// Every notification carries the complete current collection contents.
/// Notifications are monotonically improving: a later snapshot reflects a
/// superset of the writes visible when it was issued. Dropping the receiver
/// unsubscribes.
#[derive(Debug)]
pub struct Snapshots {
    initial: Option<Snapshot>,
    rx: broadcast::Receiver<Snapshot>,
}

impl Snapshots {
    /// Builds a snapshot stream from an optional immediately-available
    /// snapshot and a live receiver.
    #[must_use]
    pub const fn new(initial: Option<Snapshot>, rx: broadcast::Receiver<Snapshot>) -> Self {
        Self { initial, rx }
    }

    /// Waits for the next snapshot.
    ///
    /// Returns `None` once the store side has shut down. A slow subscriber
    /// that misses intermediate snapshots simply skips ahead to the newest
    /// one; only the latest collection state matters.
    pub async fn next(&mut self) -> Option<Snapshot> {
        if let Some(initial) = self.initial.take() {
            return Some(initial);
        }
        loop {
            match self.rx.recv().await {
                Ok(snapshot) => return Some(snapshot),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::debug!(skipped, "snapshot subscriber lagged, skipping ahead");
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }
}

/// Remote document store contract.
///
/// Collection-oriented CRUD plus a subscription mechanism that pushes the
/// full current collection contents to subscribers whenever any document
/// changes. Locators are scoped to their collection.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetches the full current contents of a collection.
    async fn fetch_all(&self, collection: Collection) -> Result<Vec<Document>>;

    /// Creates a new document and returns its store-assigned locator.
    async fn create(&self, collection: Collection, fields: Value) -> Result<DocumentId>;

    /// Overwrites an existing document's fields.
    async fn update(&self, collection: Collection, locator: &DocumentId, fields: Value)
    -> Result<()>;

    /// Deletes a document.
    async fn delete(&self, collection: Collection, locator: &DocumentId) -> Result<()>;

    /// Subscribes to live snapshots of a collection.
    ///
    /// The returned stream yields the current contents immediately, then a
    /// fresh snapshot after every change.
    async fn subscribe(&self, collection: Collection) -> Result<Snapshots>;
}

/// Persisted key-value state (browser local storage, a config file, ...).
///
/// The admin session and site-settings services sit on top of this seam
/// instead of reaching for ambient storage directly.
pub trait KeyValueStore: Send + Sync {
    /// Loads the value stored under `key`, if any.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn save(&self, key: &str, value: &str) -> Result<()>;

    /// Removes the value stored under `key`, if any.
    fn remove(&self, key: &str) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_document_id_display() {
        let id = DocumentId::new("doc-42");
        assert_eq!(id.as_str(), "doc-42");
        assert_eq!(id.to_string(), "doc-42");
    }

    #[test]
    fn test_document_construction() {
        let doc = Document::new("1", json!({ "id": 1, "title": "t" }));
        assert_eq!(doc.locator, DocumentId::new("1"));
        assert_eq!(doc.fields["title"], json!("t"));
    }

    #[test]
    fn test_snapshots_yields_initial_first() {
        tokio_test::block_on(async {
            let (tx, rx) = broadcast::channel(4);
            let initial = vec![Document::new("a", json!({ "id": 1 }))];
            let mut snapshots = Snapshots::new(Some(initial.clone()), rx);

            assert_eq!(snapshots.next().await, Some(initial));

            let live = vec![Document::new("b", json!({ "id": 2 }))];
            tx.send(live.clone()).unwrap();
            assert_eq!(snapshots.next().await, Some(live));

            drop(tx);
            assert_eq!(snapshots.next().await, None);
        });
    }
}
