//! # Foliosync
//!
//! Content engine for a portfolio/marketing site with an admin console.
//!
//! Foliosync keeps four typed content collections (articles, projects,
//! reviews, agents) mirrored between in-process state and a hosted document
//! store. Setters apply optimistically and converge the remote store with the
//! minimal set of upsert/delete writes; live snapshots from the store are the
//! authoritative correction mechanism.
//!
//! ## Features
//!
//! - Typed collection mirrors with diff-based remote convergence
//! - First-run seeding of bundled default content (idempotent)
//! - Live snapshot subscriptions with static-default fallback
//! - Admin session and site-settings services over a key-value seam
//! - Pluggable [`DocumentStore`] backends (in-memory reference included)
//!
//! ## Example
//!
//! ```rust,ignore
//! use foliosync::{ContentEngine, MemoryStore, Update};
//! use std::sync::Arc;
//!
//! let engine = ContentEngine::new(Arc::new(MemoryStore::new()));
//! engine.initialize().await;
//! engine.set_projects(Update::with(|prev| {
//!     let mut next = prev.to_vec();
//!     next.retain(|p| p.id != 2);
//!     next
//! }));
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![allow(clippy::multiple_crate_versions)]

use thiserror::Error as ThisError;

// Module declarations
pub mod engine;
pub mod models;
pub mod observability;
pub mod services;
pub mod storage;

// Re-exports for convenience
pub use engine::{ContentEngine, Update, defaults};
pub use models::{
    Agent, AgentTier, Article, Collection, ContentRecord, Project, Review, Seo, SiteSettings,
    SocialLinks,
};
pub use services::{
    AdminCredentials, AuthService, CloudinaryUploader, ImageUploader, SettingsService,
};
pub use storage::{
    Document, DocumentId, DocumentStore, KeyValueStore, MemoryKeyValueStore, MemoryStore, OpCounts,
    Snapshot, Snapshots,
};

/// Error type for foliosync operations.
///
/// Uses `thiserror` for automatic `Display` and `Error` trait implementations.
#[derive(Debug, ThisError)]
pub enum Error {
    /// Invalid input was provided.
    ///
    /// Raised when:
    /// - A stored record fails validation (e.g. empty credentials)
    /// - A caller passes a malformed value to a service
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An operation against a backing store failed.
    ///
    /// Raised when:
    /// - A document-store call (fetch, create, update, delete) fails
    /// - A key-value store read or write fails
    /// - A subscription cannot be established
    #[error("operation '{operation}' failed: {cause}")]
    OperationFailed {
        /// The operation that failed.
        operation: String,
        /// The underlying cause.
        cause: String,
    },

    /// A record or document could not be located.
    #[error("not found: {0}")]
    NotFound(String),

    /// Serialization or deserialization failed.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An image upload failed.
    ///
    /// Carries the descriptive message from the upload endpoint so the
    /// admin UI can surface it.
    #[error("image upload failed: {0}")]
    UploadFailed(String),
}

impl Error {
    /// Builds an [`Error::OperationFailed`] from an operation name and cause.
    pub fn operation(operation: impl Into<String>, cause: impl std::fmt::Display) -> Self {
        Self::OperationFailed {
            operation: operation.into(),
            cause: cause.to_string(),
        }
    }
}

/// Result type alias for foliosync operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Returns the current Unix timestamp in milliseconds.
///
/// Used as the last-resort fallback when a remote document carries neither an
/// `id` field nor a numeric locator.
#[must_use]
pub fn current_timestamp_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
