//! Blob store port definition.

use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::entities::{PutOptions, PutResult, StoredObject};
use crate::domain::errors::StorageError;

/// Port for the managed object store holding gallery images.
#[async_trait]
pub trait BlobStorePort: Send + Sync {
    /// Lists stored objects, optionally restricted to a pathname prefix.
    async fn list(&self, prefix: Option<&str>) -> Result<Vec<StoredObject>, StorageError>;

    /// Stores `body` under `pathname`.
    async fn put(
        &self,
        pathname: &str,
        body: Bytes,
        options: PutOptions,
    ) -> Result<PutResult, StorageError>;
}
