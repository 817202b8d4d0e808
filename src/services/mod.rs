//! Service layer.
//!
//! Small services the admin console talks to: session/credentials handling,
//! site-settings persistence, and the image-upload collaborator. Each sits
//! on an explicit storage seam instead of reaching for ambient state.

mod auth;
mod settings;
mod uploads;

pub use auth::{AdminCredentials, AuthService, CREDENTIALS_KEY, LOGGED_IN_KEY};
pub use settings::{SITE_SETTINGS_KEY, SettingsService};
pub use uploads::{CloudinaryUploader, ImageUploader, needs_upload};
