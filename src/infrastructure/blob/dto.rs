//! Vercel Blob API wire types.

use serde::Deserialize;

use crate::domain::entities::StoredObject;

/// One page of `GET /` results.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListBlobsResponse {
    #[serde(default)]
    pub blobs: Vec<BlobResponse>,
    #[serde(default)]
    pub cursor: Option<String>,
    #[serde(default)]
    pub has_more: bool,
}

/// Listed blob metadata.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlobResponse {
    pub pathname: String,
    pub url: String,
    #[serde(default)]
    pub content_type: Option<String>,
}

impl From<BlobResponse> for StoredObject {
    fn from(blob: BlobResponse) -> Self {
        Self::new(blob.pathname, blob.url, blob.content_type)
    }
}

/// `PUT /{pathname}` result.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutBlobResponse {
    pub url: String,
    pub pathname: String,
}

/// Error envelope returned on non-success statuses.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub code: Option<String>,
    pub message: String,
}
