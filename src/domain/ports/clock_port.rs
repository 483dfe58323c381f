//! Wall-clock port.

/// Source of the current time, injected so cache expiry can be tested
/// without real timers.
#[cfg_attr(test, mockall::automock)]
pub trait ClockPort: Send + Sync {
    /// Milliseconds since the Unix epoch.
    fn now_ms(&self) -> u64;
}
