//! Blob store adapters.

mod dto;
mod local;
mod vercel;

pub use local::LocalBlobStore;
pub use vercel::{BLOB_TOKEN_ENV, VercelBlobStore};
