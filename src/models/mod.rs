//! Data models for foliosync.
//!
//! One typed record per remote collection, plus the site-settings record
//! persisted by the admin console. Serde field names match the documents the
//! site has always written (`desc`, `cat`, `img`, ...), so existing remote
//! content parses unchanged.

mod agent;
mod article;
mod project;
mod review;
mod settings;

pub use agent::{Agent, AgentTier};
pub use article::{Article, Seo};
pub use project::Project;
pub use review::Review;
pub use settings::{SiteSettings, SocialLinks};

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;

/// The four remote content collections, with their fixed wire identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    /// Blog articles (wire name `articles`).
    Articles,
    /// Portfolio projects.
    Projects,
    /// Client reviews / testimonials.
    Reviews,
    /// AI agent catalog entries.
    Agents,
}

impl Collection {
    /// All collections, in seeding order.
    pub const ALL: [Self; 4] = [Self::Articles, Self::Projects, Self::Reviews, Self::Agents];

    /// Returns the collection name used by the remote store.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Articles => "articles",
            Self::Projects => "projects",
            Self::Reviews => "reviews",
            Self::Agents => "agents",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record belonging to one of the content collections.
///
/// Records carry a stable numeric id that is unique within their collection
/// and immutable once assigned. Display order is by descending id; insertion
/// order carries no meaning.
pub trait ContentRecord:
    Clone + fmt::Debug + Send + Sync + Serialize + DeserializeOwned + 'static
{
    /// The collection this record type lives in.
    const COLLECTION: Collection;

    /// Returns the record's application-level id.
    fn id(&self) -> i64;

    /// Returns the record with its id replaced.
    ///
    /// Used only at the ingestion boundary, when a remote document carries no
    /// `id` field and one must be derived from the locator or the clock.
    #[must_use]
    fn with_id(self, id: i64) -> Self;
}
