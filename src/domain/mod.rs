//! Domain layer with core gallery entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;
/// Pure filter, sort and index-mapping rules.
pub mod services;

pub use entities::{CacheEntry, ImageList, PutOptions, PutResult, StoredObject};
pub use errors::{ImageListError, StorageError};
pub use ports::{BlobStorePort, ClockPort, ImageListSourcePort};
