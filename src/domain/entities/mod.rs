//! Domain entity definitions.

mod cache_entry;
mod image_list;
mod stored_object;

pub use cache_entry::CacheEntry;
pub use image_list::ImageList;
pub use stored_object::{BlobAccess, PutOptions, PutResult, StoredObject};
