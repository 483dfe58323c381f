//! Vercel Blob REST adapter.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url, header};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

use super::dto::{ErrorResponse, ListBlobsResponse, PutBlobResponse};
use crate::domain::entities::{PutOptions, PutResult, StoredObject};
use crate::domain::errors::StorageError;
use crate::domain::ports::BlobStorePort;

/// Environment variable holding the read-write token.
pub const BLOB_TOKEN_ENV: &str = "BLOB_READ_WRITE_TOKEN";

const API_VERSION: &str = "7";
const LIST_PAGE_LIMIT: &str = "1000";
const USER_AGENT: &str = concat!("blob-gallery/", env!("CARGO_PKG_VERSION"));

/// Blob store backed by the Vercel Blob API.
pub struct VercelBlobStore {
    client: Client,
    api_url: String,
    token: String,
}

impl VercelBlobStore {
    /// Creates a store using `token` against `api_url`.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new(
        token: impl Into<String>,
        api_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, StorageError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| StorageError::network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    /// Creates a store reading the token from [`BLOB_TOKEN_ENV`].
    ///
    /// # Errors
    /// Returns error if the token is unset or the HTTP client cannot be built.
    pub fn from_env(
        api_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, StorageError> {
        let token = std::env::var(BLOB_TOKEN_ENV)
            .ok()
            .filter(|t| !t.trim().is_empty())
            .ok_or(StorageError::MissingToken {
                env_var: BLOB_TOKEN_ENV,
            })?;
        Self::new(token, api_url, timeout)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header(header::AUTHORIZATION, format!("Bearer {}", self.token))
            .header("x-api-version", API_VERSION)
    }

    /// Builds the upload URL, percent-encoding each pathname segment.
    fn put_url(&self, pathname: &str) -> Result<Url, StorageError> {
        let mut url = Url::parse(&self.api_url)
            .map_err(|e| StorageError::network(format!("invalid blob API URL: {e}")))?;
        url.path_segments_mut()
            .map_err(|()| StorageError::invalid_pathname(pathname))?
            .pop_if_empty()
            .extend(pathname.split('/'));
        Ok(url)
    }

    async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, StorageError> {
        let status = response.status();
        if !status.is_success() {
            return Err(Self::handle_error_response(status, response).await);
        }

        response.json::<T>().await.map_err(|e| {
            warn!(error = %e, "Failed to parse blob API response");
            StorageError::decode(e.to_string())
        })
    }

    async fn handle_error_response(status: StatusCode, response: Response) -> StorageError {
        let message = match response.json::<ErrorResponse>().await {
            Ok(body) => match body.error.code {
                Some(code) => format!("{code}: {}", body.error.message),
                None => body.error.message,
            },
            Err(_) => format!("HTTP {status}"),
        };
        StorageError::api(status.as_u16(), message)
    }
}

fn map_transport_error(e: &reqwest::Error) -> StorageError {
    warn!(error = %e, "Failed to reach blob API");
    if e.is_timeout() {
        StorageError::network("request timed out")
    } else if e.is_connect() {
        StorageError::network("failed to connect to blob API")
    } else {
        StorageError::network(e.to_string())
    }
}

#[async_trait]
impl BlobStorePort for VercelBlobStore {
    async fn list(&self, prefix: Option<&str>) -> Result<Vec<StoredObject>, StorageError> {
        let mut objects = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let mut request = self
                .client
                .get(&self.api_url)
                .query(&[("limit", LIST_PAGE_LIMIT)]);
            if let Some(prefix) = prefix {
                request = request.query(&[("prefix", prefix)]);
            }
            if let Some(cursor) = &cursor {
                request = request.query(&[("cursor", cursor.as_str())]);
            }

            let response = self
                .authorized(request)
                .send()
                .await
                .map_err(|e| map_transport_error(&e))?;
            let page: ListBlobsResponse = Self::parse(response).await?;

            debug!(page = page.blobs.len(), has_more = page.has_more, "Listed blob page");
            objects.extend(page.blobs.into_iter().map(StoredObject::from));

            match page.cursor {
                Some(next) if page.has_more => cursor = Some(next),
                _ => break,
            }
        }

        Ok(objects)
    }

    async fn put(
        &self,
        pathname: &str,
        body: Bytes,
        options: PutOptions,
    ) -> Result<PutResult, StorageError> {
        let pathname = pathname.trim_start_matches('/');
        if pathname.is_empty() {
            return Err(StorageError::invalid_pathname(pathname));
        }

        let url = self.put_url(pathname)?;
        let mut request = self
            .client
            .put(url)
            .header("x-vercel-blob-access", options.access.as_str())
            .header(
                "x-add-random-suffix",
                if options.add_random_suffix { "1" } else { "0" },
            )
            .body(body);
        if let Some(content_type) = &options.content_type {
            request = request.header("x-content-type", content_type);
        }

        let response = self
            .authorized(request)
            .send()
            .await
            .map_err(|e| map_transport_error(&e))?;
        let stored: PutBlobResponse = Self::parse(response).await?;

        debug!(pathname = %stored.pathname, "Stored blob");

        Ok(PutResult {
            url: stored.url,
            pathname: stored.pathname,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::{Path, Query};
    use axum::http::{HeaderMap, StatusCode as AxumStatus};
    use axum::routing::{get, put};
    use axum::{Json, Router};
    use serde_json::{Value, json};
    use std::collections::HashMap;

    async fn spawn_fake_api(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn store(api_url: &str) -> VercelBlobStore {
        VercelBlobStore::new("test-token", api_url, Some(Duration::from_secs(5))).unwrap()
    }

    async fn paged_list(
        headers: HeaderMap,
        Query(params): Query<HashMap<String, String>>,
    ) -> (AxumStatus, Json<Value>) {
        if headers.get("authorization").and_then(|v| v.to_str().ok()) != Some("Bearer test-token")
        {
            return (
                AxumStatus::FORBIDDEN,
                Json(json!({"error": {"code": "forbidden", "message": "bad token"}})),
            );
        }
        let page = match params.get("cursor").map(String::as_str) {
            None => json!({
                "blobs": [{"pathname": "b.png", "url": "U2", "contentType": "image/png"}],
                "cursor": "page2",
                "hasMore": true
            }),
            Some("page2") => json!({
                "blobs": [{"pathname": "a.jpg", "url": "U1", "contentType": "image/jpeg"}],
                "hasMore": false
            }),
            Some(_) => json!({"blobs": [], "hasMore": false}),
        };
        (AxumStatus::OK, Json(page))
    }

    #[tokio::test]
    async fn test_list_follows_cursor() {
        let base = spawn_fake_api(Router::new().route("/", get(paged_list))).await;

        let objects = store(&base).list(None).await.unwrap();

        let paths: Vec<_> = objects.iter().map(|o| o.pathname.as_str()).collect();
        assert_eq!(paths, vec!["b.png", "a.jpg"]);
    }

    #[tokio::test]
    async fn test_list_error_carries_api_message() {
        let base = spawn_fake_api(Router::new().route("/", get(paged_list))).await;
        let store = VercelBlobStore::new("wrong", &base, Some(Duration::from_secs(5))).unwrap();

        let err = store.list(None).await.unwrap_err();

        assert!(matches!(err, StorageError::Api { status: 403, .. }));
        assert!(err.to_string().contains("forbidden: bad token"));
    }

    #[tokio::test]
    async fn test_list_malformed_body_is_decode_error() {
        let router = Router::new().route("/", get(|| async { "not json" }));
        let base = spawn_fake_api(router).await;

        let err = store(&base).list(Some("images/")).await.unwrap_err();

        assert!(matches!(err, StorageError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_list_unreachable_is_network_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = store(&format!("http://{addr}")).list(None).await.unwrap_err();

        assert!(err.is_network_error());
    }

    #[tokio::test]
    async fn test_put_sends_upload_headers() {
        let router = Router::new().route(
            "/{*pathname}",
            put(|Path(pathname): Path<String>, headers: HeaderMap| async move {
                let header = |name: &str| {
                    headers
                        .get(name)
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or_default()
                        .to_string()
                };
                if header("x-content-type") != "image/jpeg"
                    || header("x-add-random-suffix") != "0"
                    || header("x-api-version") != API_VERSION
                {
                    return (
                        AxumStatus::BAD_REQUEST,
                        Json(json!({"error": {"message": "missing upload headers"}})),
                    );
                }
                (
                    AxumStatus::OK,
                    Json(json!({
                        "url": format!("https://blob.test/{pathname}"),
                        "pathname": pathname,
                    })),
                )
            }),
        );
        let base = spawn_fake_api(router).await;
        let store = store(&base);

        let result = store
            .put(
                "img1.jpg",
                Bytes::from_static(b"jpeg"),
                PutOptions::public().with_content_type("image/jpeg"),
            )
            .await
            .unwrap();

        assert_eq!(result.url, "https://blob.test/img1.jpg");
        assert_eq!(result.pathname, "img1.jpg");

        let err = store
            .put("img2.jpg", Bytes::from_static(b"jpeg"), PutOptions::public())
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::Api { status: 400, .. }));
    }

    #[tokio::test]
    async fn test_put_encodes_reserved_characters() {
        let router = Router::new().route(
            "/{*pathname}",
            put(|Path(pathname): Path<String>| async move {
                Json(json!({
                    "url": format!("https://blob.test/{pathname}"),
                    "pathname": pathname,
                }))
            }),
        );
        let base = spawn_fake_api(router).await;

        let result = store(&base)
            .put(
                "images/a#1?.jpg",
                Bytes::from_static(b"jpeg"),
                PutOptions::public(),
            )
            .await
            .unwrap();

        assert_eq!(result.pathname, "images/a#1?.jpg");
    }

    #[test]
    fn test_put_url_keeps_api_path() {
        let store = store("https://blob.test/api/");

        let url = store.put_url("images/a b#1.jpg").unwrap();

        assert_eq!(url.as_str(), "https://blob.test/api/images/a%20b%231.jpg");
    }

    #[test]
    fn test_from_env_requires_token() {
        if std::env::var(BLOB_TOKEN_ENV).is_err() {
            let result = VercelBlobStore::from_env("https://blob.test", Some(Duration::from_secs(1)));
            assert!(matches!(result, Err(StorageError::MissingToken { .. })));
        }
    }
}
