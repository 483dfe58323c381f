//! Image listing use case behind the `/api/images` endpoint.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::dto::ImagesResponse;
use crate::domain::errors::StorageError;
use crate::domain::ports::BlobStorePort;
use crate::domain::services::{ImageFilterMode, select_image_urls};

/// Lists gallery images from the blob store.
#[derive(Clone)]
pub struct ListImagesUseCase {
    store: Arc<dyn BlobStorePort>,
    prefix: Option<String>,
    filter: ImageFilterMode,
}

impl ListImagesUseCase {
    /// Creates new list use case over the whole bucket in strict mode.
    #[must_use]
    pub fn new(store: Arc<dyn BlobStorePort>) -> Self {
        Self {
            store,
            prefix: None,
            filter: ImageFilterMode::default(),
        }
    }

    /// Restricts the listing to a pathname prefix such as `images/`.
    #[must_use]
    pub fn with_prefix(mut self, prefix: Option<String>) -> Self {
        self.prefix = prefix.filter(|p| !p.is_empty());
        self
    }

    /// Sets which objects count as images.
    #[must_use]
    pub const fn with_filter(mut self, filter: ImageFilterMode) -> Self {
        self.filter = filter;
        self
    }

    /// Lists, filters and sorts the stored images.
    ///
    /// # Errors
    /// Returns the store error unchanged; nothing is retried.
    pub async fn execute(&self) -> Result<ImagesResponse, StorageError> {
        debug!(prefix = ?self.prefix, filter = %self.filter, "Listing blob images");

        let objects = self
            .store
            .list(self.prefix.as_deref())
            .await
            .inspect_err(|e| warn!(error = %e, "Blob listing failed"))?;

        let total = objects.len();
        let images = select_image_urls(objects, self.filter);

        info!(total, images = images.len(), "Found blob images");

        Ok(ImagesResponse::new(images))
    }
}
