//! Hand-driven clock for throttle tests.

use std::cell::Cell;

use stalker::Clock;

/// Clock whose time only moves when a test advances it.
#[derive(Debug, Default)]
pub struct ManualClock {
    now_ms: Cell<f64>,
}

impl ManualClock {
    /// Create a clock frozen at `now_ms`.
    ///
    /// # Examples
    /// ```
    /// use stalker::Clock;
    /// use test_utils::ManualClock;
    /// let clock = ManualClock::new(250.0);
    /// clock.advance(100.0);
    /// assert_eq!(clock.now_ms(), 350.0);
    /// ```
    pub fn new(now_ms: f64) -> Self {
        Self {
            now_ms: Cell::new(now_ms),
        }
    }

    /// Move time forward by `ms`.
    pub fn advance(&self, ms: f64) {
        self.now_ms.set(self.now_ms.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now_ms.get()
    }
}
