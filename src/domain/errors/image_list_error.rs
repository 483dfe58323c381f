//! Errors fetching the image list from the endpoint.

use thiserror::Error;

/// Failure modes of a client-side image list fetch.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum ImageListError {
    #[error("image list request failed: {message}")]
    Network { message: String },

    #[error("image list API request failed: {status}")]
    Status { status: u16 },

    #[error("malformed image list response: {message}")]
    Decode { message: String },
}

impl ImageListError {
    /// Creates network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates decode error.
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}
