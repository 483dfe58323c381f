//! HTTP client for the image list endpoint.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

use crate::application::dto::ImagesResponse;
use crate::domain::entities::ImageList;
use crate::domain::errors::ImageListError;
use crate::domain::ports::ImageListSourcePort;

const USER_AGENT: &str = concat!("blob-gallery/", env!("CARGO_PKG_VERSION"));

/// Fetches the image list from a running `/api/images` endpoint.
pub struct HttpImageListSource {
    client: Client,
    endpoint_url: String,
}

impl HttpImageListSource {
    /// Creates client for `endpoint_url`; without `timeout` requests wait indefinitely.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new(
        endpoint_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, ImageListError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ImageListError::network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint_url: endpoint_url.into(),
        })
    }
}

#[async_trait]
impl ImageListSourcePort for HttpImageListSource {
    async fn fetch_image_list(&self) -> Result<ImageList, ImageListError> {
        debug!(url = %self.endpoint_url, "Requesting image list");

        let response = self
            .client
            .get(&self.endpoint_url)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to reach image list endpoint");
                if e.is_timeout() {
                    ImageListError::network("request timed out")
                } else {
                    ImageListError::network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ImageListError::Status {
                status: status.as_u16(),
            });
        }

        let body: ImagesResponse = response
            .json()
            .await
            .map_err(|e| ImageListError::decode(e.to_string()))?;

        Ok(ImageList::new(body.images))
    }
}
