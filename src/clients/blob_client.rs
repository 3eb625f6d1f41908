use tracing::{debug, info, instrument};
use crate::actor_framework::{ResourceClient, Write};
use crate::blob_actor::BlobError;
use crate::domain::StoredImage;

/// Client for the image blob store.
///
/// Objects live under `images/<name>` and are served from `base_url`.
#[derive(Clone)]
pub struct BlobClient {
    inner: ResourceClient<StoredImage>,
    base_url: String,
    default_image_url: String,
}

impl BlobClient {
    pub fn new(inner: ResourceClient<StoredImage>, base_url: &str, default_image_name: &str) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        let default_image_url = format!("{}/{}", base_url, default_image_name);
        Self { inner, base_url, default_image_url }
    }

    /// Image used for items that have none of their own.
    pub fn default_image_url(&self) -> &str {
        &self.default_image_url
    }

    /// Stores `bytes` as `images/<name>` and returns the URL it is served from.
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    pub async fn upload(&self, name: &str, bytes: Vec<u8>) -> Result<String, BlobError> {
        debug!("Sending request");
        let name = name.trim();
        if name.is_empty() {
            return Err(BlobError::InvalidUpload("Image name required".to_string()));
        }
        if bytes.is_empty() {
            return Err(BlobError::InvalidUpload(format!("Image {} is empty", name)));
        }

        let object = format!("images/{}", name);
        let url = format!("{}/{}", self.base_url, object);
        let image = StoredImage { name: object, bytes };

        self.inner
            .put(Write::Replace(image))
            .await
            .map_err(|e| BlobError::StorageError(e.to_string()))?;

        info!(url = %url, "Image uploaded");
        Ok(url)
    }
}
