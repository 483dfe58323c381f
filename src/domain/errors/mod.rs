//! Domain error types.

mod image_list_error;
mod storage_error;

pub use image_list_error::ImageListError;
pub use storage_error::StorageError;
