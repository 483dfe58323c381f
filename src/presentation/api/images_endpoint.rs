//! `/api/images` request handling, independent of the HTTP server.

use axum::Json;
use axum::http::{HeaderValue, Method, StatusCode, header};
use axum::response::{IntoResponse, Response};
use tracing::{debug, error};

use crate::application::dto::{ErrorResponse, ImagesResponse};
use crate::application::use_cases::ListImagesUseCase;

/// Body of an endpoint response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EndpointBody {
    /// No body (preflight).
    Empty,
    /// Image list.
    Images(ImagesResponse),
    /// Error payload.
    Error(ErrorResponse),
}

/// Status and body produced by [`ImagesEndpoint::handle`].
///
/// CORS headers are attached when converted into an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointResponse {
    /// HTTP status.
    pub status: StatusCode,
    /// Response body.
    pub body: EndpointBody,
}

impl EndpointResponse {
    fn new(status: StatusCode, body: EndpointBody) -> Self {
        Self { status, body }
    }
}

impl IntoResponse for EndpointResponse {
    fn into_response(self) -> Response {
        let mut response = match self.body {
            EndpointBody::Empty => self.status.into_response(),
            EndpointBody::Images(images) => (self.status, Json(images)).into_response(),
            EndpointBody::Error(error) => (self.status, Json(error)).into_response(),
        };

        let headers = response.headers_mut();
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET"),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        );

        response
    }
}

/// Handles requests for the gallery image list.
#[derive(Clone)]
pub struct ImagesEndpoint {
    list_images: ListImagesUseCase,
}

impl ImagesEndpoint {
    /// Creates endpoint over the list use case.
    #[must_use]
    pub const fn new(list_images: ListImagesUseCase) -> Self {
        Self { list_images }
    }

    /// Produces the response for a request with `method`.
    pub async fn handle(&self, method: &Method) -> EndpointResponse {
        if *method == Method::OPTIONS {
            return EndpointResponse::new(StatusCode::OK, EndpointBody::Empty);
        }

        if *method != Method::GET {
            debug!(%method, "Rejecting unsupported method");
            return EndpointResponse::new(
                StatusCode::METHOD_NOT_ALLOWED,
                EndpointBody::Error(ErrorResponse::method_not_allowed()),
            );
        }

        match self.list_images.execute().await {
            Ok(images) => EndpointResponse::new(StatusCode::OK, EndpointBody::Images(images)),
            Err(e) => {
                error!(error = %e, "Error fetching blob images");
                EndpointResponse::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    EndpointBody::Error(ErrorResponse::fetch_failed(e.to_string())),
                )
            }
        }
    }
}
