//! Use case implementations.

mod list_images_use_case;
mod upload_images_use_case;

pub use list_images_use_case::ListImagesUseCase;
pub use upload_images_use_case::{DEFAULT_UPLOAD_PAUSE, UploadImagesUseCase};
