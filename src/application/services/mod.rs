mod gallery_service;
mod image_fetcher;
mod image_list_cache;

pub use gallery_service::{DEFAULT_BATCH_SIZE, GalleryService};
pub use image_fetcher::ImageFetcher;
pub use image_list_cache::{DEFAULT_FRESHNESS_WINDOW, ImageListCache};
