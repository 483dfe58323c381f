//! Cached image list with its fetch timestamp.

use std::time::Duration;

use super::ImageList;

/// The single cached image list and the time it was fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    /// Cached URLs.
    pub list: ImageList,
    /// Wall-clock fetch time in milliseconds since the Unix epoch.
    pub fetched_at_ms: u64,
}

impl CacheEntry {
    /// Creates a new entry.
    #[must_use]
    pub const fn new(list: ImageList, fetched_at_ms: u64) -> Self {
        Self {
            list,
            fetched_at_ms,
        }
    }

    /// Returns true while `now_ms - fetched_at_ms < window`.
    ///
    /// A clock that moved backwards counts as zero elapsed time.
    #[must_use]
    pub fn is_fresh(&self, now_ms: u64, window: Duration) -> bool {
        let elapsed = u128::from(now_ms.saturating_sub(self.fetched_at_ms));
        elapsed < window.as_millis()
    }
}
