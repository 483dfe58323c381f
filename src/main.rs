use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use blob_gallery::application::dto::UploadOutcome;
use blob_gallery::application::{
    GalleryService, ImageFetcher, ImageListCache, ListImagesUseCase, UploadImagesUseCase,
};
use blob_gallery::domain::ports::BlobStorePort;
use blob_gallery::domain::services::FallbackImages;
use blob_gallery::infrastructure::config::{GalleryArgs, StorageConfig};
use blob_gallery::infrastructure::{
    AppConfig, CliArgs, Command, ConfigStore, HttpImageListSource, LocalBlobStore,
    StorageBackend, SystemClock, VercelBlobStore,
};
use blob_gallery::presentation::{ImagesEndpoint, router, serve};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = &config.log_path {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    Ok(())
}

fn load_config(args: &CliArgs) -> Result<(ConfigStore, AppConfig)> {
    let store = ConfigStore::new(args.config.as_deref())?;
    let mut config = store.load()?;
    config.merge_with_args(args);
    Ok((store, config))
}

fn blob_store(config: &StorageConfig) -> Result<Arc<dyn BlobStorePort>> {
    let store: Arc<dyn BlobStorePort> = match config.backend {
        StorageBackend::Vercel => Arc::new(VercelBlobStore::from_env(
            config.api_url.clone(),
            config.timeout(),
        )?),
        StorageBackend::Local => Arc::new(LocalBlobStore::new(
            config.local_root.clone(),
            &config.public_base_url,
        )),
    };
    Ok(store)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}

async fn run_serve(config: &AppConfig) -> Result<()> {
    let list_images = ListImagesUseCase::new(blob_store(&config.storage)?)
        .with_prefix(config.storage.prefix.clone())
        .with_filter(config.storage.filter);
    let endpoint = Arc::new(ImagesEndpoint::new(list_images));

    let listener = TcpListener::bind(&config.server.bind).await?;
    serve(listener, router(endpoint), shutdown_signal()).await?;

    Ok(())
}

async fn run_gallery(config: &AppConfig, args: &GalleryArgs) -> Result<()> {
    let source = Arc::new(HttpImageListSource::new(
        config.gallery.endpoint_url.clone(),
        config.storage.timeout(),
    )?);
    let cache = ImageListCache::with_window(Arc::new(SystemClock), config.gallery.freshness_window());
    let fetcher = Arc::new(ImageFetcher::new(source, cache));
    let gallery = GalleryService::new(
        fetcher,
        FallbackImages::new(config.gallery.fallback_image_count),
    );

    if args.batches {
        let batches = gallery.image_batches(config.gallery.batch_size).await;
        for (i, batch) in batches.iter().enumerate() {
            println!("batch {}: {}", i + 1, batch.join(" "));
        }
    } else {
        for (i, url) in gallery.card_urls(args.cards).await.iter().enumerate() {
            println!("{i}\t{url}");
        }
    }

    Ok(())
}

async fn run_upload(config: &AppConfig) -> Result<()> {
    let report = UploadImagesUseCase::new(blob_store(&config.storage)?)
        .with_pause(config.upload.pause())
        .with_prefix(config.storage.prefix.clone())
        .execute(&config.upload.source_dir)
        .await?;

    for outcome in &report.outcomes {
        match outcome {
            UploadOutcome::Uploaded { file, url } => {
                println!("uploaded {} -> {url}", file.display());
            }
            UploadOutcome::Failed { file, reason } => {
                eprintln!("failed {}: {reason}", file.display());
            }
        }
    }
    println!("{} uploaded, {} failed", report.uploaded(), report.failed());

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    dotenvy::from_filename(".env.local").ok();
    dotenvy::dotenv().ok();

    let args = CliArgs::parse();
    let (store, config) = load_config(&args)?;

    init_logging(&config)?;

    info!(
        version = blob_gallery::VERSION,
        config = %store.path().display(),
        "Starting {}",
        blob_gallery::NAME
    );

    match &args.command {
        Command::Serve(_) => run_serve(&config).await,
        Command::Gallery(gallery) => run_gallery(&config, gallery).await,
        Command::Upload(_) => run_upload(&config).await,
    }
}
