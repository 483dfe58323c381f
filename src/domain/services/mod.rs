//! Pure domain rules for selecting, ordering and addressing gallery images.

mod content_type;
mod image_filter;
mod image_resolver;

pub use content_type::{content_type_for_path, has_image_extension};
pub use image_filter::{ImageFilterMode, select_image_urls};
pub use image_resolver::{DEFAULT_FALLBACK_IMAGE_COUNT, FallbackImages, resolve_url};
