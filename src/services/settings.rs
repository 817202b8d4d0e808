//! Site-settings persistence.

use crate::Result;
use crate::models::SiteSettings;
use crate::storage::KeyValueStore;
use std::sync::Arc;
use tracing::warn;

/// Storage key for the site-settings record.
pub const SITE_SETTINGS_KEY: &str = "siteSettings";

/// Loads and saves the site-wide settings record.
pub struct SettingsService {
    store: Arc<dyn KeyValueStore>,
}

impl SettingsService {
    /// Builds the service over a key-value store.
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Returns the stored settings, or the defaults when the record is
    /// missing or corrupt.
    #[must_use]
    pub fn load(&self) -> SiteSettings {
        match self.store.load(SITE_SETTINGS_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|error| {
                warn!(%error, "stored site settings are corrupt, using defaults");
                SiteSettings::default()
            }),
            Ok(None) => SiteSettings::default(),
            Err(error) => {
                warn!(%error, "could not read site settings, using defaults");
                SiteSettings::default()
            }
        }
    }

    /// Persists the settings record.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store cannot be written.
    pub fn save(&self, settings: &SiteSettings) -> Result<()> {
        let raw = serde_json::to_string(settings)?;
        self.store.save(SITE_SETTINGS_KEY, &raw)
    }
}
