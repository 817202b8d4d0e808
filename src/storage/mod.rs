//! Storage layer abstraction.
//!
//! Two seams:
//! - [`DocumentStore`]: the hosted collection-oriented database (CRUD plus
//!   live full-collection snapshots). The synchronizer is written against
//!   this trait; `MemoryStore` is the bundled reference backend.
//! - [`KeyValueStore`]: persisted key-value state (browser local storage in
//!   the web frontend) backing the session and settings services.

mod memory;
mod traits;

pub use memory::{MemoryKeyValueStore, MemoryStore, OpCounts};
pub use traits::{Document, DocumentId, DocumentStore, KeyValueStore, Snapshot, Snapshots};
