//! Upload batch results.

use std::path::PathBuf;

/// Result of uploading one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// Stored at the given URL.
    Uploaded {
        /// Local file.
        file: PathBuf,
        /// Public URL returned by the store.
        url: String,
    },
    /// Upload failed; the batch continued.
    Failed {
        /// Local file.
        file: PathBuf,
        /// Error text.
        reason: String,
    },
}

/// Summary of an upload batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadReport {
    /// Per-file outcomes in upload order.
    pub outcomes: Vec<UploadOutcome>,
}

impl UploadReport {
    /// Number of successful uploads.
    #[must_use]
    pub fn uploaded(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, UploadOutcome::Uploaded { .. }))
            .count()
    }

    /// Number of failed uploads.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.uploaded()
    }

    /// Returns true if every file was uploaded.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failed() == 0
    }
}
