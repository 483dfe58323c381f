mod blob_store_port;
mod clock_port;
mod image_list_source_port;

pub use blob_store_port::BlobStorePort;
#[cfg(test)]
pub use clock_port::MockClockPort;
pub use clock_port::ClockPort;
pub use image_list_source_port::ImageListSourcePort;

#[cfg(test)]
pub mod mocks {
    pub use super::blob_store_port::mock::MockBlobStore;
    pub use super::image_list_source_port::mock::MockImageListSource;
}
