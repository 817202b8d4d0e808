//! Portfolio project records.

use super::article::Seo;
use super::{Collection, ContentRecord};
use serde::{Deserialize, Serialize};

/// A portfolio project shown in the gallery.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Stable numeric id, unique within the collection.
    #[serde(default)]
    pub id: i64,
    /// Project name.
    #[serde(default)]
    pub title: String,
    /// One-line description shown under the title.
    #[serde(default)]
    pub subtitle: String,
    /// Display category (e.g. "WordPress & E-Commerce").
    #[serde(rename = "cat", default)]
    pub category: String,
    /// Cover image URL.
    #[serde(rename = "img", default)]
    pub image_url: String,
    /// Technology tags.
    #[serde(default)]
    pub tech: Vec<String>,
    /// External link to the live project.
    #[serde(default)]
    pub link: String,
    /// Optional SEO sub-record (present on the bundled defaults).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo: Option<Seo>,
}

impl ContentRecord for Project {
    const COLLECTION: Collection = Collection::Projects;

    fn id(&self) -> i64 {
        self.id
    }

    fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_project_wire_names() {
        let project = Project {
            id: 1,
            title: "Avanti Wines".to_string(),
            category: "WordPress & E-Commerce".to_string(),
            image_url: "https://example.com/p.jpg".to_string(),
            tech: vec!["WordPress".to_string(), "Stripe".to_string()],
            link: "https://avanti-wines.co.uk/".to_string(),
            ..Project::default()
        };
        let value = serde_json::to_value(&project).unwrap();
        assert_eq!(value["cat"], json!("WordPress & E-Commerce"));
        assert_eq!(value["img"], json!("https://example.com/p.jpg"));
        // Absent SEO record stays off the wire entirely.
        assert!(value.get("seo").is_none());
    }

    #[test]
    fn test_project_round_trip_with_seo() {
        let project = Project {
            id: 2,
            title: "Roberta Flat".to_string(),
            seo: Some(Seo {
                score: 92,
                ..Seo::default()
            }),
            ..Project::default()
        };
        let value = serde_json::to_value(&project).unwrap();
        let back: Project = serde_json::from_value(value).unwrap();
        assert_eq!(back, project);
    }
}
