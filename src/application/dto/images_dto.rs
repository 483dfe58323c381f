//! JSON bodies of the image list endpoint.

use serde::{Deserialize, Deserializer, Serialize};

/// Deserializes `null` as the type's default.
///
/// # Errors
///
/// Returns an error if the value is neither `null` nor a valid `T`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Successful `/api/images` body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagesResponse {
    /// Image URLs sorted by pathname.
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<String>,
    /// Always `images.len()`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub count: usize,
}

impl ImagesResponse {
    /// Creates response; `count` is derived from the list.
    #[must_use]
    pub fn new(images: Vec<String>) -> Self {
        let count = images.len();
        Self { images, count }
    }
}

/// Error body of the image list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Short error label.
    pub error: String,
    /// Underlying cause, when there is one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorResponse {
    /// Body for unsupported methods.
    #[must_use]
    pub fn method_not_allowed() -> Self {
        Self {
            error: "Method not allowed".to_string(),
            message: None,
        }
    }

    /// Body for a failed storage listing.
    #[must_use]
    pub fn fetch_failed(message: impl Into<String>) -> Self {
        Self {
            error: "Failed to fetch images".to_string(),
            message: Some(message.into()),
        }
    }
}
