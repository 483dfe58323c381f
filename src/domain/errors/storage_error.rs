//! Blob store error types.

use thiserror::Error;

/// Errors raised by a blob store adapter.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum StorageError {
    #[error("network error talking to blob store: {message}")]
    Network { message: String },

    #[error("blob store returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("failed to decode blob store response: {message}")]
    Decode { message: String },

    #[error("blob store io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("blob store token is not configured (set {env_var})")]
    MissingToken { env_var: &'static str },

    #[error("invalid blob pathname: {pathname}")]
    InvalidPathname { pathname: String },
}

impl StorageError {
    /// Creates network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates API error from a non-success status.
    #[must_use]
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
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

    /// Creates invalid pathname error.
    #[must_use]
    pub fn invalid_pathname(pathname: impl Into<String>) -> Self {
        Self::InvalidPathname {
            pathname: pathname.into(),
        }
    }

    /// Returns whether error is network related.
    #[must_use]
    pub const fn is_network_error(&self) -> bool {
        matches!(self, Self::Network { .. })
    }
}
