//! The content engine: four collection mirrors behind one facade.
//!
//! [`ContentEngine`] owns a [`CollectionState`](collection::CollectionState)
//! per remote collection. Reads return the current local mirror; setters
//! adopt the new list optimistically and converge the remote store in the
//! background; live snapshots from the store overwrite the mirrors
//! wholesale (last snapshot wins).

mod collection;
pub mod defaults;

use crate::models::{Agent, Article, Project, Review};
use crate::storage::DocumentStore;
use collection::CollectionState;
use std::sync::Arc;
use tracing::info;

/// A desired new list for a collection: either a literal replacement or a
/// pure function of the previous list.
pub enum Update<T> {
    /// Replace the list wholesale.
    Replace(Vec<T>),
    /// Derive the new list from the previous one.
    With(Box<dyn FnOnce(&[T]) -> Vec<T> + Send>),
}

impl<T> Update<T> {
    /// Builds a functional update.
    ///
    /// The closure runs with no engine lock held, so it is free to read the
    /// collection getters.
    pub fn with(f: impl FnOnce(&[T]) -> Vec<T> + Send + 'static) -> Self {
        Self::With(Box::new(f))
    }

    pub(crate) fn resolve(self, prev: &[T]) -> Vec<T> {
        match self {
            Self::Replace(items) => items,
            Self::With(f) => f(prev),
        }
    }
}

impl<T> From<Vec<T>> for Update<T> {
    fn from(items: Vec<T>) -> Self {
        Self::Replace(items)
    }
}

/// The content engine.
///
/// Construct with [`ContentEngine::new`], call [`initialize`] once, then
/// read and write the four collections freely. Setters return before any
/// remote I/O happens; write failures are logged, never surfaced, and the
/// optimistic mirror is corrected by the next authoritative snapshot.
///
/// Setters schedule their remote writes on the ambient Tokio runtime, so the
/// engine must live inside one.
///
/// [`initialize`]: ContentEngine::initialize
pub struct ContentEngine {
    articles: CollectionState<Article>,
    projects: CollectionState<Project>,
    reviews: CollectionState<Review>,
    agents: CollectionState<Agent>,
}

impl ContentEngine {
    /// Builds an engine over `store` with the bundled default content.
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self::with_defaults(
            store,
            defaults::articles(),
            defaults::projects(),
            defaults::reviews(),
            defaults::agents(),
        )
    }

    /// Builds an engine with custom default content for each collection.
    #[must_use]
    pub fn with_defaults(
        store: Arc<dyn DocumentStore>,
        articles: Vec<Article>,
        projects: Vec<Project>,
        reviews: Vec<Review>,
        agents: Vec<Agent>,
    ) -> Self {
        Self {
            articles: CollectionState::new(Arc::clone(&store), articles),
            projects: CollectionState::new(Arc::clone(&store), projects),
            reviews: CollectionState::new(Arc::clone(&store), reviews),
            agents: CollectionState::new(store, agents),
        }
    }

    /// Seeds empty collections and starts the live listeners, all four
    /// collections in parallel. Runs once; never fails (every remote error
    /// is absorbed, with the bundled defaults as the fallback).
    pub async fn initialize(&self) {
        tokio::join!(
            self.articles.initialize(),
            self.projects.initialize(),
            self.reviews.initialize(),
            self.agents.initialize(),
        );
        info!("content engine initialized");
    }

    /// Current article mirror, newest (highest id) first.
    #[must_use]
    pub fn articles(&self) -> Vec<Article> {
        self.articles.items()
    }

    /// Current project mirror, newest first.
    #[must_use]
    pub fn projects(&self) -> Vec<Project> {
        self.projects.items()
    }

    /// Current review mirror, newest first.
    #[must_use]
    pub fn reviews(&self) -> Vec<Review> {
        self.reviews.items()
    }

    /// Current agent mirror, newest first.
    #[must_use]
    pub fn agents(&self) -> Vec<Agent> {
        self.agents.items()
    }

    /// Sets the article list. Optimistic; returns before remote I/O.
    pub fn set_articles(&self, update: impl Into<Update<Article>>) {
        self.articles.set(update.into());
    }

    /// Sets the project list. Optimistic; returns before remote I/O.
    pub fn set_projects(&self, update: impl Into<Update<Project>>) {
        self.projects.set(update.into());
    }

    /// Sets the review list. Optimistic; returns before remote I/O.
    pub fn set_reviews(&self, update: impl Into<Update<Review>>) {
        self.reviews.set(update.into());
    }

    /// Sets the agent list. Optimistic; returns before remote I/O.
    pub fn set_agents(&self, update: impl Into<Update<Agent>>) {
        self.agents.set(update.into());
    }

    /// `true` until every collection has received its first snapshot (or
    /// fallen back to defaults).
    #[must_use]
    pub fn is_loading(&self) -> bool {
        !(self.articles.loaded()
            && self.projects.loaded()
            && self.reviews.loaded()
            && self.agents.loaded())
    }

    /// Deletes every document in all four remote collections and rewrites
    /// the full default lists. Disaster recovery / demo reset only.
    pub async fn reset_all_data(&self) {
        tokio::join!(
            self.articles.reset_to_defaults(),
            self.projects.reset_to_defaults(),
            self.reviews.reset_to_defaults(),
            self.agents.reset_to_defaults(),
        );
        info!("all collections reset to defaults");
    }

    /// Tears down the snapshot listeners. In-flight writes complete or fail
    /// on their own; they are not cancelled.
    pub fn shutdown(&self) {
        self.articles.shutdown();
        self.projects.shutdown();
        self.reviews.shutdown();
        self.agents.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Review;

    #[test]
    fn test_update_replace_resolves_literally() {
        let update: Update<Review> = vec![Review::default()].into();
        let resolved = update.resolve(&[]);
        assert_eq!(resolved.len(), 1);
    }

    #[test]
    fn test_update_with_sees_previous_list() {
        let prev = vec![Review {
            id: 1,
            ..Review::default()
        }];
        let update = Update::with(|prev: &[Review]| {
            let mut next = prev.to_vec();
            next.push(Review {
                id: 2,
                ..Review::default()
            });
            next
        });
        let resolved = update.resolve(&prev);
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[1].id, 2);
    }
}
