//! Per-frame steering and path following.
//!
//! Steering turns a target point and a speed into this frame's displacement.
//! [`PathFollower`] layers waypoint tracking on top: it steers at the current
//! waypoint, advances once the enemy is within [`ARRIVAL_THRESHOLD`], and
//! steers straight at the goal once the path runs out or when there is none.

use glam::Vec3;

use crate::clock::Clock;
use crate::pathfinding::Path;
use crate::vector_math::direction_to;
use crate::{ARRIVAL_THRESHOLD, PATH_RECOMPUTE_INTERVAL_MS};

/// Displacement covering `speed · delta_secs` along the line to `target`.
///
/// # Examples
/// ```
/// use glam::Vec3;
/// use stalker::steering::steer;
/// let step = steer(Vec3::ZERO, Vec3::new(0.0, 0.0, 10.0), 4.0, 0.5);
/// assert!((step - Vec3::new(0.0, 0.0, 2.0)).length() < 1e-6);
/// ```
#[must_use]
pub fn steer(position: Vec3, target: Vec3, speed: f32, delta_secs: f32) -> Vec3 {
    direction_to(position, target) * speed * delta_secs
}

/// Progress along the most recently adopted path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathFollower {
    path: Option<Path>,
    index: usize,
}

impl PathFollower {
    /// Replaces the current path wholesale.
    ///
    /// Paths with fewer than two waypoints carry no routing information and
    /// clear the follower instead, so the next step heads straight for the goal.
    pub fn adopt(&mut self, path: Option<Path>) {
        self.path = path.filter(|p| p.len() > 1);
        self.index = 0;
    }

    /// Drops the current path.
    pub fn clear(&mut self) {
        self.adopt(None);
    }

    /// Path being followed, if any.
    #[must_use]
    pub const fn path(&self) -> Option<&Path> {
        self.path.as_ref()
    }

    /// Index of the waypoint being steered at.
    #[must_use]
    pub const fn waypoint_index(&self) -> usize {
        self.index
    }

    /// Waypoint currently being steered at, if the path is not exhausted.
    #[must_use]
    pub fn current_waypoint(&self) -> Option<Vec3> {
        self.path.as_ref().and_then(|p| p.waypoint(self.index))
    }

    /// Steers one frame, following the path when possible.
    ///
    /// Arrival is judged from the position before this frame's movement.
    pub fn step(&mut self, position: Vec3, goal: Vec3, speed: f32, delta_secs: f32) -> Vec3 {
        let Some(waypoint) = self.current_waypoint() else {
            return steer(position, goal, speed, delta_secs);
        };
        let displacement = steer(position, waypoint, speed, delta_secs);
        if position.distance(waypoint) < ARRIVAL_THRESHOLD {
            self.index += 1;
        }
        displacement
    }
}

/// Rate limit on path searches for one enemy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecomputeThrottle {
    last_ms: Option<f64>,
    interval_ms: f64,
}

impl Default for RecomputeThrottle {
    fn default() -> Self {
        Self::new(PATH_RECOMPUTE_INTERVAL_MS)
    }
}

impl RecomputeThrottle {
    /// Throttle that grants one search per `interval_ms`.
    #[must_use]
    pub const fn new(interval_ms: f64) -> Self {
        Self {
            last_ms: None,
            interval_ms,
        }
    }

    /// Timestamp of the last granted search.
    #[must_use]
    pub const fn last_ms(&self) -> Option<f64> {
        self.last_ms
    }

    /// Grants a search if none has run yet or the interval has strictly
    /// elapsed, recording the grant time.
    pub fn try_acquire(&mut self, clock: &dyn Clock) -> bool {
        let now = clock.now_ms();
        let due = self
            .last_ms
            .map_or(true, |last| now - last > self.interval_ms);
        if due {
            self.last_ms = Some(now);
        }
        due
    }
}
