//! Image upload collaborator.
//!
//! The admin console edits records whose image field may still hold a
//! locally-encoded `data:` URL. Before persisting, it pushes the image to an
//! upload endpoint and swaps in the returned public URL. The endpoint here
//! is a Cloudinary-style unsigned upload profile.

use crate::{Error, Result};
use async_trait::async_trait;
use tracing::debug;

/// Returns `true` when an image field holds a locally-encoded image that
/// still needs uploading (as opposed to an already-public URL).
#[must_use]
pub fn needs_upload(url: &str) -> bool {
    url.starts_with("data:")
}

/// Uploads an image payload and returns a publicly-resolvable URL.
#[async_trait]
pub trait ImageUploader: Send + Sync {
    /// Uploads `image` (a base64 `data:` URL) through the named upload
    /// profile, returning the public URL.
    async fn upload(&self, image: &str, profile: &str) -> Result<String>;
}

/// [`ImageUploader`] backed by Cloudinary's unsigned upload endpoint.
pub struct CloudinaryUploader {
    client: reqwest::Client,
    cloud_name: String,
}

impl CloudinaryUploader {
    /// Builds an uploader for the given Cloudinary cloud.
    #[must_use]
    pub fn new(cloud_name: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            cloud_name: cloud_name.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "https://api.cloudinary.com/v1_1/{}/image/upload",
            self.cloud_name
        )
    }
}

#[async_trait]
impl ImageUploader for CloudinaryUploader {
    async fn upload(&self, image: &str, profile: &str) -> Result<String> {
        let response = self
            .client
            .post(self.endpoint())
            .form(&[("file", image), ("upload_preset", profile)])
            .send()
            .await
            .map_err(|e| Error::UploadFailed(e.to_string()))?;

        let status = response.status();
        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| Error::UploadFailed(format!("unreadable response: {e}")))?;

        if !status.is_success() {
            let message = body
                .pointer("/error/message")
                .and_then(serde_json::Value::as_str)
                .unwrap_or("upload rejected");
            return Err(Error::UploadFailed(format!("{status}: {message}")));
        }

        let url = body
            .get("secure_url")
            .and_then(serde_json::Value::as_str)
            .ok_or_else(|| Error::UploadFailed("response missing secure_url".to_string()))?;
        debug!(url, "image uploaded");
        Ok(url.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_needs_upload() {
        assert!(needs_upload("data:image/png;base64,iVBORw0KGgo="));
        assert!(!needs_upload("https://images.unsplash.com/photo-1.jpg"));
        assert!(!needs_upload(""));
    }

    #[test]
    fn test_endpoint_includes_cloud_name() {
        let uploader = CloudinaryUploader::new("dmdjur2bd");
        assert_eq!(
            uploader.endpoint(),
            "https://api.cloudinary.com/v1_1/dmdjur2bd/image/upload"
        );
    }
}
