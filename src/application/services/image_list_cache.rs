//! Single-entry, time-expiring image list cache.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use crate::domain::entities::{CacheEntry, ImageList};
use crate::domain::ports::ClockPort;

/// How long a fetched list is served without re-fetching (5 minutes).
pub const DEFAULT_FRESHNESS_WINDOW: Duration = Duration::from_millis(300_000);

/// Holds at most one image list and the time it was stored.
pub struct ImageListCache {
    clock: Arc<dyn ClockPort>,
    window: Duration,
    entry: Mutex<Option<CacheEntry>>,
}

impl ImageListCache {
    /// Creates an empty cache with the default freshness window.
    #[must_use]
    pub fn new(clock: Arc<dyn ClockPort>) -> Self {
        Self::with_window(clock, DEFAULT_FRESHNESS_WINDOW)
    }

    /// Creates an empty cache with a custom freshness window.
    #[must_use]
    pub fn with_window(clock: Arc<dyn ClockPort>, window: Duration) -> Self {
        Self {
            clock,
            window,
            entry: Mutex::new(None),
        }
    }

    /// Returns the cached list if it is still fresh.
    #[must_use]
    pub fn get(&self) -> Option<ImageList> {
        let now = self.clock.now_ms();
        self.entry
            .lock()
            .as_ref()
            .filter(|e| e.is_fresh(now, self.window))
            .map(|e| e.list.clone())
    }

    /// Replaces the cached list, stamping it with the current time.
    pub fn set(&self, list: ImageList) {
        let entry = CacheEntry::new(list, self.clock.now_ms());
        *self.entry.lock() = Some(entry);
    }

    /// Returns true if a fresh list is cached.
    #[must_use]
    pub fn is_fresh(&self) -> bool {
        let now = self.clock.now_ms();
        self.entry
            .lock()
            .as_ref()
            .is_some_and(|e| e.is_fresh(now, self.window))
    }

    /// Returns when the current entry was stored, fresh or not.
    #[must_use]
    pub fn fetched_at_ms(&self) -> Option<u64> {
        self.entry.lock().as_ref().map(|e| e.fetched_at_ms)
    }
}
