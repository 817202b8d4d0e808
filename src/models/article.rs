//! Blog article records and their SEO metadata.

use super::{Collection, ContentRecord};
use serde::{Deserialize, Deserializer, Serialize};

/// SEO metadata attached to articles and (optionally) projects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seo {
    /// Page title override.
    #[serde(default)]
    pub title: String,
    /// Meta description.
    #[serde(default)]
    pub description: String,
    /// The keyword the admin console scores the page against.
    #[serde(default)]
    pub focus_keyword: String,
    /// Canonical URL, empty when the page URL is canonical.
    #[serde(default)]
    pub canonical: String,
    /// Open Graph title override.
    #[serde(default)]
    pub og_title: String,
    /// Open Graph description override.
    #[serde(default)]
    pub og_description: String,
    /// Derived SEO score, clamped to 0-100 at the ingestion boundary.
    #[serde(default, deserialize_with = "clamped_score")]
    pub score: u8,
}

/// Remote documents are not trusted to hold a sane score.
fn clamped_score<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = i64::deserialize(deserializer)?;
    Ok(u8::try_from(raw.clamp(0, 100)).unwrap_or(100))
}

/// A published blog article.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Stable numeric id, unique within the collection.
    #[serde(default)]
    pub id: i64,
    /// Headline.
    #[serde(default)]
    pub title: String,
    /// Short teaser shown in listing cards.
    #[serde(rename = "desc", default)]
    pub summary: String,
    /// Full markdown body.
    #[serde(rename = "content", default)]
    pub body: String,
    /// Display category.
    #[serde(rename = "cat", default)]
    pub category: String,
    /// Cover image URL.
    #[serde(rename = "img", default)]
    pub image_url: String,
    /// Preformatted publish date (e.g. "Oct 12, 2025").
    #[serde(rename = "date", default)]
    pub published: String,
    /// Free-form tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// SEO sub-record.
    #[serde(default)]
    pub seo: Seo,
}

impl ContentRecord for Article {
    const COLLECTION: Collection = Collection::Articles;

    fn id(&self) -> i64 {
        self.id
    }

    fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }
}
