//! HTTP server exposing the image list endpoint.

use std::future::Future;
use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::Method;
use axum::response::IntoResponse;
use axum::routing::any;
use tokio::net::TcpListener;
use tracing::info;

use super::api::ImagesEndpoint;

/// Path the image list is served at.
pub const IMAGES_ROUTE: &str = "/api/images";

async fn images(State(endpoint): State<Arc<ImagesEndpoint>>, method: Method) -> impl IntoResponse {
    endpoint.handle(&method).await
}

/// Builds the router; every method on [`IMAGES_ROUTE`] reaches the endpoint.
pub fn router(endpoint: Arc<ImagesEndpoint>) -> Router {
    Router::new()
        .route(IMAGES_ROUTE, any(images))
        .with_state(endpoint)
}

/// Serves `router` on `listener` until `shutdown` resolves.
///
/// # Errors
/// Returns error if the server fails while accepting connections.
pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, route = IMAGES_ROUTE, "Serving image list");
    }

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::{ErrorResponse, ImagesResponse};
    use crate::application::services::{GalleryService, ImageFetcher, ImageListCache};
    use crate::application::use_cases::ListImagesUseCase;
    use crate::domain::entities::StoredObject;
    use crate::domain::ports::mocks::MockBlobStore;
    use crate::domain::ports::{BlobStorePort, ClockPort, MockClockPort};
    use crate::domain::services::FallbackImages;
    use crate::infrastructure::{HttpImageListSource, LocalBlobStore};
    use reqwest::StatusCode;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::Duration;

    async fn spawn_server(store: Arc<dyn BlobStorePort>) -> String {
        let endpoint = Arc::new(ImagesEndpoint::new(ListImagesUseCase::new(store)));
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(serve(listener, router(endpoint), std::future::pending()));
        format!("http://{addr}")
    }

    fn scenario_store() -> Arc<MockBlobStore> {
        Arc::new(MockBlobStore::with_objects(vec![
            StoredObject::new("b.png", "U2", Some("image/png".into())),
            StoredObject::new("a.jpg", "U1", Some("image/jpeg".into())),
            StoredObject::new("c.txt", "U3", Some("text/plain".into())),
        ]))
    }

    #[tokio::test]
    async fn test_get_over_http() {
        let base = spawn_server(scenario_store()).await;

        let response = reqwest::get(format!("{base}{IMAGES_ROUTE}")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["access-control-allow-origin"], "*");
        let body: ImagesResponse = response.json().await.unwrap();
        assert_eq!(body.images, vec!["U1", "U2"]);
        assert_eq!(body.count, body.images.len());
    }

    #[tokio::test]
    async fn test_preflight_and_method_errors_over_http() {
        let base = spawn_server(scenario_store()).await;
        let url = format!("{base}{IMAGES_ROUTE}");
        let client = reqwest::Client::new();

        let preflight = client
            .request(reqwest::Method::OPTIONS, &url)
            .send()
            .await
            .unwrap();
        assert_eq!(preflight.status(), StatusCode::OK);
        assert_eq!(preflight.headers()["access-control-allow-methods"], "GET");
        assert!(preflight.bytes().await.unwrap().is_empty());

        let post = client.post(&url).send().await.unwrap();
        assert_eq!(post.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            post.json::<ErrorResponse>().await.unwrap(),
            ErrorResponse::method_not_allowed()
        );
    }

    #[tokio::test]
    async fn test_upstream_failure_over_http() {
        let store = scenario_store();
        store.set_fail_list(true);
        let base = spawn_server(store).await;

        let response = reqwest::get(format!("{base}{IMAGES_ROUTE}")).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["error"], "Failed to fetch images");
        assert!(body["message"].as_str().unwrap().contains("connection reset"));
    }

    #[tokio::test]
    async fn test_unknown_path_is_404() {
        let base = spawn_server(scenario_store()).await;

        let response = reqwest::get(format!("{base}/api/other")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_gallery_reads_local_store_through_endpoint() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["img2.png", "img1.jpg", "readme.md"] {
            std::fs::write(dir.path().join(name), b"x").unwrap();
        }
        let store = Arc::new(LocalBlobStore::new(dir.path(), "https://cdn.test"));
        let base = spawn_server(store).await;

        let url = format!("{base}{IMAGES_ROUTE}");
        let source = Arc::new(HttpImageListSource::new(url, Some(Duration::from_secs(5))).unwrap());
        let now = Arc::new(AtomicU64::new(0));
        let handle = now.clone();
        let mut clock = MockClockPort::new();
        clock
            .expect_now_ms()
            .returning(move || handle.load(Ordering::SeqCst));
        let clock: Arc<dyn ClockPort> = Arc::new(clock);
        let fetcher = Arc::new(ImageFetcher::new(source, ImageListCache::new(clock)));
        let gallery = GalleryService::new(fetcher.clone(), FallbackImages::default());

        assert_eq!(
            gallery.card_urls(3).await,
            vec![
                "https://cdn.test/img1.jpg",
                "https://cdn.test/img2.png",
                "https://cdn.test/img1.jpg",
            ]
        );
        assert_eq!(fetcher.cache().fetched_at_ms(), Some(0));

        std::fs::write(dir.path().join("img0.jpg"), b"x").unwrap();
        assert_eq!(gallery.image_url(0).await, "https://cdn.test/img1.jpg");

        now.store(300_000, Ordering::SeqCst);
        assert_eq!(gallery.image_url(0).await, "https://cdn.test/img0.jpg");
        assert_eq!(fetcher.cache().fetched_at_ms(), Some(300_000));
    }

    #[tokio::test]
    async fn test_gallery_falls_back_when_endpoint_down() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let url = format!("http://{addr}{IMAGES_ROUTE}");
        let source = Arc::new(HttpImageListSource::new(url, Some(Duration::from_secs(2))).unwrap());
        let mut clock = MockClockPort::new();
        clock.expect_now_ms().return_const(0u64);
        let fetcher = Arc::new(ImageFetcher::new(
            source,
            ImageListCache::new(Arc::new(clock)),
        ));
        let gallery = GalleryService::new(fetcher, FallbackImages::new(362));

        assert_eq!(gallery.image_url(361).await, "/img362.jpg");
        assert!(gallery.image_batches(50).await.is_empty());
    }
}
