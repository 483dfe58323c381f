//! Stored object metadata and upload options.

use serde::{Deserialize, Serialize};

/// Metadata record for one object held by the blob store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredObject {
    /// Path of the object inside the bucket, e.g. `images/img1.jpg`.
    pub pathname: String,
    /// Public URL of the object.
    pub url: String,
    /// MIME type reported by the store, if any.
    #[serde(default)]
    pub content_type: Option<String>,
}

impl StoredObject {
    /// Creates a new stored object record.
    #[must_use]
    pub fn new(
        pathname: impl Into<String>,
        url: impl Into<String>,
        content_type: Option<String>,
    ) -> Self {
        Self {
            pathname: pathname.into(),
            url: url.into(),
            content_type,
        }
    }

    /// Returns the content type, if known.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }
}

/// Visibility of an uploaded blob.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlobAccess {
    /// Readable by anyone holding the URL.
    #[default]
    Public,
}

impl BlobAccess {
    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
        }
    }
}

/// Options for storing a blob.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PutOptions {
    /// Access level.
    pub access: BlobAccess,
    /// MIME type to record with the object.
    pub content_type: Option<String>,
    /// Whether the store should append a random suffix to the pathname.
    pub add_random_suffix: bool,
}

impl PutOptions {
    /// Public upload with no explicit content type.
    #[must_use]
    pub const fn public() -> Self {
        Self {
            access: BlobAccess::Public,
            content_type: None,
            add_random_suffix: false,
        }
    }

    /// Sets the content type.
    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Enables or disables the random pathname suffix.
    #[must_use]
    pub const fn with_random_suffix(mut self, enabled: bool) -> Self {
        self.add_random_suffix = enabled;
        self
    }
}

/// Result of a successful put.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PutResult {
    /// Public URL of the stored object.
    pub url: String,
    /// Final pathname (differs from the requested one when a suffix was added).
    pub pathname: String,
}
