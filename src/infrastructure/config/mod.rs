//! Application configuration.

pub mod app_config;
pub mod args;
pub mod storage;

pub use app_config::{
    AppConfig, GalleryConfig, LogLevel, ServerConfig, StorageBackend, StorageConfig, UploadConfig,
};
pub use args::{CliArgs, Command, GalleryArgs, ServeArgs, StorageArgs, UploadArgs};
pub use storage::{ConfigError, ConfigStore};
