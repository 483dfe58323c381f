//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::domain::services::{DEFAULT_FALLBACK_IMAGE_COUNT, ImageFilterMode};

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Which blob store adapter to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Vercel Blob REST API.
    #[default]
    Vercel,
    /// A local directory, for development.
    Local,
}

/// Application configuration, loaded from TOML and overridden by CLI flags.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// HTTP server configuration.
    #[serde(default)]
    pub server: ServerConfig,

    /// Blob store configuration.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Gallery client configuration.
    #[serde(default)]
    pub gallery: GalleryConfig,

    /// Upload utility configuration.
    #[serde(default)]
    pub upload: UploadConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Socket address to listen on.
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

/// Blob store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Adapter to use.
    #[serde(default)]
    pub backend: StorageBackend,

    /// Only list objects under this pathname prefix (e.g. `images/`).
    #[serde(default)]
    pub prefix: Option<String>,

    /// Image selection rule.
    #[serde(default)]
    pub filter: ImageFilterMode,

    /// Blob API base URL.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Request timeout in seconds; 0 waits on the network indefinitely.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Root directory of the local backend.
    #[serde(default = "default_local_root")]
    pub local_root: PathBuf,

    /// URL prefix for objects of the local backend. Empty yields site-relative paths.
    #[serde(default)]
    pub public_base_url: String,
}

impl StorageConfig {
    /// Returns the request timeout, if one is configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        if self.timeout_secs == 0 {
            return None;
        }
        Some(Duration::from_secs(self.timeout_secs))
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            prefix: None,
            filter: ImageFilterMode::default(),
            api_url: default_api_url(),
            timeout_secs: default_timeout_secs(),
            local_root: default_local_root(),
            public_base_url: String::new(),
        }
    }
}

/// Gallery client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryConfig {
    /// Image list endpoint URL.
    #[serde(default = "default_endpoint_url")]
    pub endpoint_url: String,

    /// How long a fetched list stays fresh, in seconds.
    #[serde(default = "default_freshness_window_secs")]
    pub freshness_window_secs: u64,

    /// Size of the bundled `/imgN.jpg` fallback set.
    #[serde(default = "default_fallback_image_count")]
    pub fallback_image_count: usize,

    /// URLs per batch.
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
}

impl GalleryConfig {
    /// Returns the freshness window.
    #[must_use]
    pub const fn freshness_window(&self) -> Duration {
        Duration::from_secs(self.freshness_window_secs)
    }
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            endpoint_url: default_endpoint_url(),
            freshness_window_secs: default_freshness_window_secs(),
            fallback_image_count: default_fallback_image_count(),
            batch_size: default_batch_size(),
        }
    }
}

/// Upload utility configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Directory whose image files are uploaded.
    #[serde(default = "default_local_root")]
    pub source_dir: PathBuf,

    /// Pause between uploads in milliseconds.
    #[serde(default = "default_pause_ms")]
    pub pause_ms: u64,
}

impl UploadConfig {
    /// Returns the pause between uploads.
    #[must_use]
    pub const fn pause(&self) -> Duration {
        Duration::from_millis(self.pause_ms)
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            source_dir: default_local_root(),
            pause_ms: default_pause_ms(),
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_api_url() -> String {
    "https://blob.vercel-storage.com".to_string()
}

fn default_timeout_secs() -> u64 {
    0
}

fn default_local_root() -> PathBuf {
    PathBuf::from("public")
}

fn default_endpoint_url() -> String {
    "http://127.0.0.1:3000/api/images".to_string()
}

fn default_freshness_window_secs() -> u64 {
    300
}

fn default_fallback_image_count() -> usize {
    DEFAULT_FALLBACK_IMAGE_COUNT
}

fn default_batch_size() -> usize {
    50
}

fn default_pause_ms() -> u64 {
    100
}

use super::args::{CliArgs, Command};

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: &CliArgs) {
        if let Some(log_path) = &args.log_path {
            self.log_path = Some(log_path.clone());
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }

        match &args.command {
            Command::Serve(serve) => {
                if let Some(bind) = &serve.bind {
                    self.server.bind.clone_from(bind);
                }
                if let Some(backend) = serve.storage.backend {
                    self.storage.backend = backend;
                }
                if let Some(prefix) = &serve.storage.prefix {
                    self.storage.prefix = Some(prefix.clone());
                }
                if let Some(filter) = serve.filter {
                    self.storage.filter = filter;
                }
                if let Some(root) = &serve.storage.local_root {
                    self.storage.local_root.clone_from(root);
                }
            }
            Command::Gallery(gallery) => {
                if let Some(endpoint) = &gallery.endpoint {
                    self.gallery.endpoint_url.clone_from(endpoint);
                }
                if let Some(count) = gallery.fallback_count {
                    self.gallery.fallback_image_count = count;
                }
                if let Some(batch_size) = gallery.batch_size {
                    self.gallery.batch_size = batch_size;
                }
            }
            Command::Upload(upload) => {
                if let Some(dir) = &upload.dir {
                    self.upload.source_dir.clone_from(dir);
                }
                if let Some(pause_ms) = upload.pause_ms {
                    self.upload.pause_ms = pause_ms;
                }
                if let Some(backend) = upload.storage.backend {
                    self.storage.backend = backend;
                }
                if let Some(prefix) = &upload.storage.prefix {
                    self.storage.prefix = Some(prefix.clone());
                }
                if let Some(root) = &upload.storage.local_root {
                    self.storage.local_root.clone_from(root);
                }
            }
        }
    }
}
