//! Cached, de-duplicated access to the remote image list.

use std::sync::Arc;

use futures_util::FutureExt;
use futures_util::future::{BoxFuture, Shared};
use parking_lot::Mutex;
use tracing::{debug, info, warn};

use super::image_list_cache::ImageListCache;
use crate::domain::entities::ImageList;
use crate::domain::ports::ImageListSourcePort;

/// Outcome shared by every caller attached to one fetch; `None` on failure.
type PendingFetch = Shared<BoxFuture<'static, Option<ImageList>>>;

/// Serves the image list from cache, fetching it at most once per window.
///
/// Callers arriving while a fetch is outstanding attach to it instead of
/// issuing their own request. Failures are logged and reported as an empty
/// list; they are never cached.
pub struct ImageFetcher {
    source: Arc<dyn ImageListSourcePort>,
    cache: ImageListCache,
    pending: Mutex<Option<PendingFetch>>,
}

impl ImageFetcher {
    /// Creates fetcher over `source` using `cache`.
    #[must_use]
    pub fn new(source: Arc<dyn ImageListSourcePort>, cache: ImageListCache) -> Self {
        Self {
            source,
            cache,
            pending: Mutex::new(None),
        }
    }

    /// Returns the underlying cache.
    #[must_use]
    pub const fn cache(&self) -> &ImageListCache {
        &self.cache
    }

    /// Returns the current image list; empty if it could not be fetched.
    pub async fn fetch_images(&self) -> ImageList {
        let fetch = {
            let mut pending = self.pending.lock();

            if let Some(list) = self.cache.get() {
                debug!(count = list.len(), "Using cached image list");
                return list;
            }

            match pending.as_ref() {
                Some(fetch) => {
                    debug!("Joining in-flight image list fetch");
                    fetch.clone()
                }
                None => {
                    let fetch = self.start_fetch();
                    *pending = Some(fetch.clone());
                    fetch
                }
            }
        };

        let outcome = fetch.clone().await;

        {
            let mut pending = self.pending.lock();
            if pending.as_ref().is_some_and(|p| p.ptr_eq(&fetch)) {
                *pending = None;
                if let Some(list) = &outcome {
                    self.cache.set(list.clone());
                }
            }
        }

        outcome.unwrap_or_default()
    }

    fn start_fetch(&self) -> PendingFetch {
        let source = Arc::clone(&self.source);
        debug!("Fetching image list from endpoint");

        async move {
            match source.fetch_image_list().await {
                Ok(list) => {
                    info!(count = list.len(), "Loaded image list");
                    Some(list)
                }
                Err(e) => {
                    warn!(error = %e, "Failed to fetch image list, serving empty list");
                    None
                }
            }
        }
        .boxed()
        .shared()
    }
}
