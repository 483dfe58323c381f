//! Bulk upload of local image files to the blob store.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use tokio::fs;
use tracing::{debug, error, info};

use crate::application::dto::{UploadOutcome, UploadReport};
use crate::domain::entities::PutOptions;
use crate::domain::errors::StorageError;
use crate::domain::ports::BlobStorePort;
use crate::domain::services::{content_type_for_path, has_image_extension};

/// Pause between two successful uploads.
pub const DEFAULT_UPLOAD_PAUSE: Duration = Duration::from_millis(100);

/// Uploads every image file of a directory, keeping file names.
#[derive(Clone)]
pub struct UploadImagesUseCase {
    store: Arc<dyn BlobStorePort>,
    pause: Duration,
    prefix: Option<String>,
}

impl UploadImagesUseCase {
    /// Creates new upload use case.
    #[must_use]
    pub fn new(store: Arc<dyn BlobStorePort>) -> Self {
        Self {
            store,
            pause: DEFAULT_UPLOAD_PAUSE,
            prefix: None,
        }
    }

    /// Sets the pause between uploads.
    #[must_use]
    pub const fn with_pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }

    /// Stores files under `prefix` (e.g. `images/`) instead of the bucket root.
    #[must_use]
    pub fn with_prefix(mut self, prefix: Option<String>) -> Self {
        self.prefix = prefix.filter(|p| !p.is_empty());
        self
    }

    /// Finds image files directly inside `dir`, sorted by name.
    ///
    /// # Errors
    /// Returns error if the directory cannot be read.
    pub async fn discover(dir: &Path) -> Result<Vec<PathBuf>, StorageError> {
        let mut entries = fs::read_dir(dir).await?;
        let mut files = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if entry.file_type().await?.is_file()
                && path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(has_image_extension)
            {
                files.push(path);
            }
        }

        files.sort();
        Ok(files)
    }

    /// Uploads all image files in `dir`. One failed file does not stop the batch.
    ///
    /// # Errors
    /// Returns error only if the directory cannot be enumerated.
    pub async fn execute(&self, dir: &Path) -> Result<UploadReport, StorageError> {
        let files = Self::discover(dir).await?;
        info!(dir = %dir.display(), count = files.len(), "Uploading images");

        let mut report = UploadReport::default();

        for file in files {
            match self.upload_one(&file).await {
                Ok(url) => {
                    info!(file = %file.display(), url = %url, "Uploaded image");
                    report.outcomes.push(UploadOutcome::Uploaded { file, url });
                    if !self.pause.is_zero() {
                        tokio::time::sleep(self.pause).await;
                    }
                }
                Err(e) => {
                    error!(file = %file.display(), error = %e, "Failed to upload image");
                    report.outcomes.push(UploadOutcome::Failed {
                        file,
                        reason: e.to_string(),
                    });
                }
            }
        }

        info!(
            uploaded = report.uploaded(),
            failed = report.failed(),
            "Upload finished"
        );

        Ok(report)
    }

    async fn upload_one(&self, file: &Path) -> Result<String, StorageError> {
        let name = file
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| StorageError::invalid_pathname(file.display().to_string()))?;

        let body = Bytes::from(fs::read(file).await?);
        let pathname = match &self.prefix {
            Some(prefix) => format!("{prefix}{name}"),
            None => name.to_string(),
        };

        debug!(pathname = %pathname, size_kb = body.len() / 1024, "Uploading file");

        let options = PutOptions::public()
            .with_content_type(content_type_for_path(name))
            .with_random_suffix(false);

        let result = self.store.put(&pathname, body, options).await?;
        Ok(result.url)
    }
}
