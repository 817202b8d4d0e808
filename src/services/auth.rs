//! Admin session and credential handling.
//!
//! A single credentials record plus a boolean logged-in flag, both persisted
//! under fixed keys in the [`KeyValueStore`] seam. This is gate-keeping for
//! a single-admin console, not a security system: the default pair is
//! well-known and the whole check runs client-side.

use crate::storage::KeyValueStore;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

/// Storage key for the credentials record.
pub const CREDENTIALS_KEY: &str = "deviqra.auth.credentials";

/// Storage key for the logged-in flag.
pub const LOGGED_IN_KEY: &str = "deviqra.auth.logged_in";

/// Admin username/password pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminCredentials {
    /// Login username.
    pub username: String,
    /// Login password, stored in plain text by the legacy frontend.
    pub password: String,
}

impl Default for AdminCredentials {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            password: "password123".to_string(),
        }
    }
}

/// Stored records may predate the password field or hold empty strings.
#[derive(Debug, Default, Deserialize)]
struct StoredCredentials {
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    password: Option<String>,
}

impl StoredCredentials {
    fn into_complete(self) -> Option<AdminCredentials> {
        let username = self.username.filter(|u| !u.is_empty())?;
        let password = self.password.filter(|p| !p.is_empty())?;
        Some(AdminCredentials { username, password })
    }
}

/// Session service for the admin console.
pub struct AuthService {
    store: Arc<dyn KeyValueStore>,
}

impl AuthService {
    /// Builds the service over a key-value store.
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Returns the stored credentials, seeding the defaults when the record
    /// is missing, corrupt, or incomplete.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing store cannot be written.
    pub fn ensure_credentials(&self) -> Result<AdminCredentials> {
        if let Ok(Some(raw)) = self.store.load(CREDENTIALS_KEY) {
            match serde_json::from_str::<StoredCredentials>(&raw) {
                Ok(stored) => {
                    if let Some(credentials) = stored.into_complete() {
                        return Ok(credentials);
                    }
                }
                Err(error) => {
                    warn!(%error, "stored credentials are corrupt, reseeding defaults");
                }
            }
        }
        let defaults = AdminCredentials::default();
        self.set_credentials(&defaults)?;
        Ok(defaults)
    }

    /// Replaces the stored credentials.
    ///
    /// # Errors
    ///
    /// Returns an error when the new pair is incomplete or the store cannot
    /// be written.
    pub fn set_credentials(&self, credentials: &AdminCredentials) -> Result<()> {
        if credentials.username.is_empty() || credentials.password.is_empty() {
            return Err(Error::InvalidInput(
                "credentials must have a username and a password".to_string(),
            ));
        }
        let raw = serde_json::to_string(credentials)?;
        self.store.save(CREDENTIALS_KEY, &raw)
    }

    /// Checks a username/password pair against the stored credentials.
    #[must_use]
    pub fn verify(&self, username: &str, password: &str) -> bool {
        self.ensure_credentials().is_ok_and(|credentials| {
            credentials.username == username && credentials.password == password
        })
    }

    /// Verifies the pair and, on success, marks the session logged in.
    ///
    /// # Errors
    ///
    /// Returns an error when the flag cannot be persisted.
    pub fn login(&self, username: &str, password: &str) -> Result<bool> {
        if self.verify(username, password) {
            self.store.save(LOGGED_IN_KEY, "true")?;
            debug!(username, "admin login");
            Ok(true)
        } else {
            debug!(username, "rejected admin login");
            Ok(false)
        }
    }

    /// Clears the logged-in flag.
    ///
    /// # Errors
    ///
    /// Returns an error when the flag cannot be persisted.
    pub fn logout(&self) -> Result<()> {
        self.store.save(LOGGED_IN_KEY, "false")
    }

    /// Whether the session is currently logged in.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.store
            .load(LOGGED_IN_KEY)
            .is_ok_and(|flag| flag.as_deref() == Some("true"))
    }

    /// Removes both the credentials record and the session flag.
    ///
    /// # Errors
    ///
    /// Returns an error when the store cannot be written.
    pub fn clear(&self) -> Result<()> {
        self.store.remove(CREDENTIALS_KEY)?;
        self.store.remove(LOGGED_IN_KEY)
    }
}
