//! Gallery card to image URL lookups.

use std::sync::Arc;

use tracing::debug;

use super::image_fetcher::ImageFetcher;
use crate::domain::services::{FallbackImages, resolve_url};

/// Default number of URLs per batch.
pub const DEFAULT_BATCH_SIZE: usize = 50;

/// Answers image lookups for gallery cards.
#[derive(Clone)]
pub struct GalleryService {
    fetcher: Arc<ImageFetcher>,
    fallback: FallbackImages,
}

impl GalleryService {
    /// Creates new gallery service.
    #[must_use]
    pub const fn new(fetcher: Arc<ImageFetcher>, fallback: FallbackImages) -> Self {
        Self { fetcher, fallback }
    }

    /// Returns the image URL for card `index`.
    pub async fn image_url(&self, index: usize) -> String {
        let list = self.fetcher.fetch_images().await;
        resolve_url(&list, index, self.fallback)
    }

    /// Returns image URLs for the first `cards` cards, fetching the list once.
    pub async fn card_urls(&self, cards: usize) -> Vec<String> {
        let list = self.fetcher.fetch_images().await;
        if list.is_empty() {
            debug!(cards, "No remote images, using bundled fallback");
        }
        (0..cards)
            .map(|i| resolve_url(&list, i, self.fallback))
            .collect()
    }

    /// Splits the image list into batches of `batch_size` URLs.
    ///
    /// Returns no batches when the list is empty or unavailable.
    pub async fn image_batches(&self, batch_size: usize) -> Vec<Vec<String>> {
        self.fetcher.fetch_images().await.batches(batch_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::ImageListCache;
    use crate::domain::errors::ImageListError;
    use crate::domain::ports::MockClockPort;
    use crate::domain::ports::mocks::MockImageListSource;

    fn service(source: MockImageListSource, fallback: usize) -> GalleryService {
        let mut clock = MockClockPort::new();
        clock.expect_now_ms().return_const(0u64);
        let fetcher = ImageFetcher::new(Arc::new(source), ImageListCache::new(Arc::new(clock)));
        GalleryService::new(Arc::new(fetcher), FallbackImages::new(fallback))
    }

    #[tokio::test]
    async fn test_image_url_wraps_remote_list() {
        let gallery = service(MockImageListSource::returning(&["U1", "U2", "U3"]), 10);

        assert_eq!(gallery.image_url(0).await, "U1");
        assert_eq!(gallery.image_url(4).await, "U2");
        assert_eq!(gallery.image_url(4).await, gallery.image_url(7).await);
    }

    #[tokio::test]
    async fn test_image_url_falls_back_on_failure() {
        let gallery = service(
            MockImageListSource::failing(ImageListError::network("offline")),
            362,
        );

        assert_eq!(gallery.image_url(0).await, "/img1.jpg");
        assert_eq!(gallery.image_url(400).await, "/img39.jpg");
    }

    #[tokio::test]
    async fn test_card_urls_uses_fallback_for_empty_list() {
        let gallery = service(MockImageListSource::returning(&[]), 2);

        assert_eq!(
            gallery.card_urls(3).await,
            vec!["/img1.jpg", "/img2.jpg", "/img1.jpg"]
        );
    }

    #[tokio::test]
    async fn test_image_batches() {
        let urls: Vec<String> = (0..120).map(|i| format!("U{i}")).collect();
        let refs: Vec<&str> = urls.iter().map(String::as_str).collect();
        let gallery = service(MockImageListSource::returning(&refs), 10);

        let batches = gallery.image_batches(DEFAULT_BATCH_SIZE).await;

        assert_eq!(batches.len(), 3);
        assert_eq!(batches[2].len(), 20);
        assert_eq!(batches[1][0], "U50");
    }

    #[tokio::test]
    async fn test_image_batches_empty_on_failure() {
        let gallery = service(
            MockImageListSource::failing(ImageListError::Status { status: 500 }),
            10,
        );

        assert!(gallery.image_batches(50).await.is_empty());
    }
}
