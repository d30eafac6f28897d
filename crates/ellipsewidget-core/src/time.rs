//! Modification timestamps.

use std::sync::atomic::{AtomicU64, Ordering};

/// Process-wide modification clock.
static MODIFIED_CLOCK: AtomicU64 = AtomicU64::new(0);

/// A tick of the process-wide modification clock.
///
/// Every call to [`TimeStamp::modified`] takes a value strictly greater than
/// any value handed out before, so stamps owned by different objects (the
/// geometry, the viewport, a cached build) can be compared directly.
/// The default stamp is zero and predates every modification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeStamp(u64);

impl TimeStamp {
    /// A stamp that has never been modified.
    pub fn new() -> Self {
        Self(0)
    }

    /// A freshly modified stamp.
    pub fn now() -> Self {
        let mut stamp = Self::new();
        stamp.modified();
        stamp
    }

    /// Advance this stamp to the current clock tick.
    pub fn modified(&mut self) {
        self.0 = MODIFIED_CLOCK.fetch_add(1, Ordering::Relaxed) + 1;
    }

    /// Raw tick value.
    pub fn value(self) -> u64 {
        self.0
    }
}
