//! Application layer with use cases, services and DTOs.

/// Data transfer objects.
pub mod dto;
/// Client-side image list caching and gallery lookups.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use dto::{ErrorResponse, ImagesResponse, UploadOutcome, UploadReport};
pub use services::{DEFAULT_FRESHNESS_WINDOW, GalleryService, ImageFetcher, ImageListCache};
pub use use_cases::{ListImagesUseCase, UploadImagesUseCase};
