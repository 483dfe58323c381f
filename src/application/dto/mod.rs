//! Data transfer objects for the application layer.

mod images_dto;
mod upload_dto;

pub use images_dto::{ErrorResponse, ImagesResponse};
pub use upload_dto::{UploadOutcome, UploadReport};
