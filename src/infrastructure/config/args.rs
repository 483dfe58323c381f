use super::app_config::{LogLevel, StorageBackend};
use crate::domain::services::ImageFilterMode;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Command line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "blob-gallery",
    version,
    about = "Image list endpoint, gallery client and uploader for a blob-backed gallery",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH", global = true)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevel>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve the image list endpoint at /api/images.
    Serve(ServeArgs),
    /// Resolve gallery card images through the cached endpoint.
    Gallery(GalleryArgs),
    /// Upload local image files to the blob store.
    Upload(UploadArgs),
}

/// Blob store selection shared by `serve` and `upload`.
#[derive(Debug, Args)]
pub struct StorageArgs {
    /// Blob store adapter.
    #[arg(long, value_enum)]
    pub backend: Option<StorageBackend>,

    /// Pathname prefix, e.g. `images/`.
    #[arg(long)]
    pub prefix: Option<String>,

    /// Root directory of the local backend.
    #[arg(long, value_name = "DIR")]
    pub local_root: Option<PathBuf>,
}

/// Arguments of `serve`.
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Socket address to listen on.
    #[arg(long)]
    pub bind: Option<String>,

    /// Image selection rule.
    #[arg(long, value_enum)]
    pub filter: Option<ImageFilterMode>,

    /// Blob store selection.
    #[command(flatten)]
    pub storage: StorageArgs,
}

/// Arguments of `gallery`.
#[derive(Debug, Args)]
pub struct GalleryArgs {
    /// Image list endpoint URL.
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Number of gallery cards to resolve.
    #[arg(long, default_value_t = 12)]
    pub cards: usize,

    /// Size of the bundled fallback image set.
    #[arg(long)]
    pub fallback_count: Option<usize>,

    /// Batch size used with `--batches`.
    #[arg(long)]
    pub batch_size: Option<usize>,

    /// Print the whole list in batches instead of per card.
    #[arg(long)]
    pub batches: bool,
}

/// Arguments of `upload`.
#[derive(Debug, Args)]
pub struct UploadArgs {
    /// Directory containing the images.
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Pause between uploads in milliseconds.
    #[arg(long)]
    pub pause_ms: Option<u64>,

    /// Blob store selection.
    #[command(flatten)]
    pub storage: StorageArgs,
}
