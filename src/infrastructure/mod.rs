//! Infrastructure layer with external service adapters.

/// HTTP client for the image list endpoint.
pub mod api_client;
/// Blob store adapters.
pub mod blob;
/// System clock.
pub mod clock;
/// Application configuration.
pub mod config;

pub use api_client::HttpImageListSource;
pub use blob::{BLOB_TOKEN_ENV, LocalBlobStore, VercelBlobStore};
pub use clock::SystemClock;
pub use config::{
    AppConfig, CliArgs, Command, ConfigError, ConfigStore, LogLevel, StorageBackend,
};
