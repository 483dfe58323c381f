//! Blob Gallery - image list endpoint and client cache for a blob-backed 3D gallery.
//!
//! This crate lists image blobs from a storage bucket over HTTP, caches that
//! list on the gallery side with in-flight request sharing, maps card indices
//! to image URLs and uploads local images to the bucket.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing use cases, services and DTOs.
pub mod application;
/// Domain layer containing entities, errors, ports and pure services.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;
/// Presentation layer containing the HTTP endpoint and server.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "blob-gallery";
