//! Ordered list of gallery image URLs.

use std::sync::Arc;

/// Ordered, immutable list of image URLs.
///
/// Clones share one allocation, so two reads of the same cached list are
/// pointer-equal (see [`ImageList::ptr_eq`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageList(Arc<[String]>);

impl ImageList {
    /// Creates a list from owned URLs, keeping their order.
    #[must_use]
    pub fn new(urls: Vec<String>) -> Self {
        Self(urls.into())
    }

    /// Returns the number of URLs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the list holds no URLs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the URLs as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Returns the URL at `index`, wrapping around the list length.
    #[must_use]
    pub fn get_wrapped(&self, index: usize) -> Option<&str> {
        if self.0.is_empty() {
            return None;
        }
        Some(self.0[index % self.0.len()].as_str())
    }

    /// Splits the list into consecutive chunks of at most `batch_size` URLs.
    ///
    /// A zero batch size is treated as one.
    #[must_use]
    pub fn batches(&self, batch_size: usize) -> Vec<Vec<String>> {
        self.0
            .chunks(batch_size.max(1))
            .map(<[String]>::to_vec)
            .collect()
    }

    /// Returns true if both lists share the same allocation.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl From<Vec<String>> for ImageList {
    fn from(urls: Vec<String>) -> Self {
        Self::new(urls)
    }
}

impl FromIterator<String> for ImageList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
