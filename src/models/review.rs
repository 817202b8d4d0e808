//! Client review (testimonial) records.

use super::{Collection, ContentRecord};
use serde::{Deserialize, Deserializer, Serialize};

/// A client testimonial.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Stable numeric id, unique within the collection.
    #[serde(default)]
    pub id: i64,
    /// Author name.
    #[serde(default)]
    pub name: String,
    /// Author role or affiliation.
    #[serde(default)]
    pub role: String,
    /// Testimonial text.
    #[serde(default)]
    pub text: String,
    /// Avatar image URL, or initials used as a fallback (e.g. "MF").
    #[serde(default)]
    pub avatar: String,
    /// Star rating, clamped to 1-5 at the ingestion boundary.
    #[serde(default = "default_rating", deserialize_with = "clamped_rating")]
    pub rating: u8,
}

const fn default_rating() -> u8 {
    5
}

/// Remote documents are not trusted to hold a sane rating.
fn clamped_rating<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = i64::deserialize(deserializer)?;
    Ok(u8::try_from(raw.clamp(1, 5)).unwrap_or(5))
}

impl ContentRecord for Review {
    const COLLECTION: Collection = Collection::Reviews;

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
    use test_case::test_case;

    #[test_case(0, 1; "below range clamps up")]
    #[test_case(3, 3; "in range passes through")]
    #[test_case(99, 5; "above range clamps down")]
    #[test_case(-2, 1; "negative clamps up")]
    fn test_rating_clamped(raw: i64, expected: u8) {
        let review: Review =
            serde_json::from_value(json!({ "id": 1, "name": "A", "rating": raw })).unwrap();
        assert_eq!(review.rating, expected);
    }

    #[test]
    fn test_rating_defaults_to_five() {
        let review: Review = serde_json::from_value(json!({ "id": 1, "name": "A" })).unwrap();
        assert_eq!(review.rating, 5);
    }

    #[test]
    fn test_review_round_trip() {
        let review = Review {
            id: 2,
            name: "Fatima Khan".to_string(),
            role: "Fashion Blogger".to_string(),
            text: "Seamless!".to_string(),
            avatar: "FK".to_string(),
            rating: 5,
        };
        let value = serde_json::to_value(&review).unwrap();
        let back: Review = serde_json::from_value(value).unwrap();
        assert_eq!(back, review);
    }
}
