//! Presentation layer: the HTTP surface of the gallery.

/// Image list endpoint.
pub mod api;
/// HTTP server wiring.
pub mod server;

pub use api::{EndpointBody, EndpointResponse, ImagesEndpoint};
pub use server::{IMAGES_ROUTE, router, serve};
