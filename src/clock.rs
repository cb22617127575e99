//! Time sources for the path recomputation throttle.
//!
//! Frame deltas drive cooldowns, but replanning is bounded by clock time so a
//! burst of short frames cannot trigger a burst of searches. Hosts pass a
//! [`Clock`] into each update; tests substitute a hand-driven one.

use std::time::Instant;

/// Monotonic millisecond clock.
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    /// Milliseconds elapsed since an arbitrary fixed origin.
    fn now_ms(&self) -> f64;
}

/// Wall clock measured from the moment it was created.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Clock whose zero is the moment of construction.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Clock frozen at a timestamp sampled once per frame by the host.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInstant(pub f64);

impl Clock for FrameInstant {
    fn now_ms(&self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let first = clock.now_ms();
        let second = clock.now_ms();
        assert!(second >= first);
    }

    #[test]
    fn frame_instant_reports_its_sample() {
        assert!((FrameInstant(1250.0).now_ms() - 1250.0).abs() < f64::EPSILON);
    }
}
