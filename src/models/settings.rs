//! Site-wide settings persisted by the admin console.

use serde::{Deserialize, Serialize};

/// Social profile links shown in the footer and SEO tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    /// Twitter/X profile URL.
    #[serde(default)]
    pub twitter: String,
    /// Facebook page URL.
    #[serde(default)]
    pub facebook: String,
    /// LinkedIn profile URL.
    #[serde(default)]
    pub linkedin: String,
}

/// Site-wide settings record.
///
/// Stored as a single document under a fixed key in the key-value seam; the
/// content engine never touches it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    /// Site name, used as the default page title.
    #[serde(default = "default_site_name")]
    pub site_name: String,
    /// Fallback meta description for pages without their own.
    #[serde(default = "default_meta_description")]
    pub default_meta_description: String,
    /// Social profile links.
    #[serde(default)]
    pub social_links: SocialLinks,
}

fn default_site_name() -> String {
    "Dev.IQRA | Digital Ecosystem Architect".to_string()
}

fn default_meta_description() -> String {
    "A high-end, minimalist agency landing page with sophisticated typography, \
     soft gradients, and modern layout."
        .to_string()
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            site_name: default_site_name(),
            default_meta_description: default_meta_description(),
            social_links: SocialLinks::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_settings_wire_names() {
        let settings = SiteSettings::default();
        let value = serde_json::to_value(&settings).unwrap();
        assert!(value.get("siteName").is_some());
        assert!(value.get("defaultMetaDescription").is_some());
        assert!(value.get("socialLinks").is_some());
    }

    #[test]
    fn test_settings_defaults_fill_missing_fields() {
        let settings: SiteSettings = serde_json::from_value(json!({
            "socialLinks": { "twitter": "https://x.com/dev" }
        }))
        .unwrap();
        assert_eq!(settings.site_name, default_site_name());
        assert_eq!(settings.social_links.twitter, "https://x.com/dev");
        assert!(settings.social_links.facebook.is_empty());
    }
}
