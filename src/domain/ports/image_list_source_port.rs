//! Port for fetching the image list from the endpoint.

use async_trait::async_trait;

use crate::domain::entities::ImageList;
use crate::domain::errors::ImageListError;

/// Port for the remote image list endpoint as seen by the client.
#[async_trait]
pub trait ImageListSourcePort: Send + Sync {
    /// Fetches the current list of image URLs.
    async fn fetch_image_list(&self) -> Result<ImageList, ImageListError>;
}
