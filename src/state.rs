//! Mutable per-enemy AI state.
//!
//! One [`EnemyAiState`] exists per live enemy. It is created on spawn, lent
//! mutably to the controller once per frame, and dropped on despawn. Nothing
//! in it is shared with other enemies.

use std::f32::consts::TAU;

use crate::archetype::{Archetype, BossPhase};
use crate::steering::{PathFollower, RecomputeThrottle};

/// Which cooldown an ability consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CooldownKind {
    /// Melee strike and boss attack.
    Attack,
    /// Melee leap.
    Leap,
    /// Skirmisher shot.
    Ranged,
}

/// Remaining cooldowns in milliseconds. Values never drop below zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Cooldowns {
    attack: f32,
    leap: f32,
    ranged: f32,
}

impl Cooldowns {
    /// Counts every timer down by `elapsed_ms`, flooring at zero.
    pub fn tick(&mut self, elapsed_ms: f32) {
        let elapsed = elapsed_ms.max(0.0);
        for slot in [&mut self.attack, &mut self.leap, &mut self.ranged] {
            *slot = (*slot - elapsed).max(0.0);
        }
    }

    /// Milliseconds left on the `kind` timer.
    #[must_use]
    pub const fn remaining(&self, kind: CooldownKind) -> f32 {
        match kind {
            CooldownKind::Attack => self.attack,
            CooldownKind::Leap => self.leap,
            CooldownKind::Ranged => self.ranged,
        }
    }

    /// Whether the `kind` timer has run out.
    #[must_use]
    pub fn is_ready(&self, kind: CooldownKind) -> bool {
        self.remaining(kind) <= 0.0
    }

    /// Restarts a timer. Negative or non-finite durations start it at zero.
    pub fn start(&mut self, kind: CooldownKind, duration_ms: f32) {
        let duration = if duration_ms.is_finite() {
            duration_ms.max(0.0)
        } else {
            0.0
        };
        match kind {
            CooldownKind::Attack => self.attack = duration,
            CooldownKind::Leap => self.leap = duration,
            CooldownKind::Ranged => self.ranged = duration,
        }
    }
}

/// Everything the controller remembers about one enemy between frames.
#[derive(Debug, Clone, PartialEq)]
pub struct EnemyAiState {
    archetype: Archetype,
    pub(crate) follower: PathFollower,
    pub(crate) throttle: RecomputeThrottle,
    pub(crate) cooldowns: Cooldowns,
    /// Rolling angle used by strafing and boss orbits, in radians.
    pub(crate) circle_angle: f32,
    pub(crate) phase: Option<BossPhase>,
    pub(crate) facing: f32,
    pub(crate) replans: u32,
}

impl EnemyAiState {
    /// Fresh state with a random starting circle angle.
    #[must_use]
    pub fn new(archetype: Archetype) -> Self {
        Self::with_circle_angle(archetype, rand::random::<f32>() * TAU)
    }

    /// Fresh state with a fixed starting circle angle.
    #[must_use]
    pub fn with_circle_angle(archetype: Archetype, circle_angle: f32) -> Self {
        Self {
            archetype,
            follower: PathFollower::default(),
            throttle: RecomputeThrottle::default(),
            cooldowns: Cooldowns::default(),
            circle_angle,
            phase: None,
            facing: 0.0,
            replans: 0,
        }
    }

    /// Archetype fixed at spawn.
    #[must_use]
    pub const fn archetype(&self) -> Archetype {
        self.archetype
    }

    /// Cooldown timers.
    #[must_use]
    pub const fn cooldowns(&self) -> &Cooldowns {
        &self.cooldowns
    }

    /// Boss phase seen on the most recent frame; `None` for other archetypes.
    #[must_use]
    pub const fn phase(&self) -> Option<BossPhase> {
        self.phase
    }

    /// Current strafe or orbit angle in radians.
    #[must_use]
    pub const fn circle_angle(&self) -> f32 {
        self.circle_angle
    }

    /// Last facing yaw in radians.
    #[must_use]
    pub const fn facing(&self) -> f32 {
        self.facing
    }

    /// Path follower for chasing.
    #[must_use]
    pub const fn follower(&self) -> &PathFollower {
        &self.follower
    }

    /// Number of path searches this enemy has run.
    #[must_use]
    pub const fn replans(&self) -> u32 {
        self.replans
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    static_assertions::assert_impl_all!(EnemyAiState: Send, Sync);

    #[rstest]
    #[case::partial(400.0, 1100.0)]
    #[case::exact(1500.0, 0.0)]
    #[case::overshoot(9000.0, 0.0)]
    fn tick_floors_at_zero(#[case] elapsed: f32, #[case] expected: f32) {
        let mut cooldowns = Cooldowns::default();
        cooldowns.start(CooldownKind::Attack, 1500.0);
        cooldowns.tick(elapsed);
        assert!((cooldowns.remaining(CooldownKind::Attack) - expected).abs() < f32::EPSILON);
    }

    #[test]
    fn timers_are_independent() {
        let mut cooldowns = Cooldowns::default();
        cooldowns.start(CooldownKind::Leap, 3000.0);
        assert!(cooldowns.is_ready(CooldownKind::Attack));
        assert!(!cooldowns.is_ready(CooldownKind::Leap));
        assert!(cooldowns.is_ready(CooldownKind::Ranged));
    }

    #[test]
    fn negative_durations_clamp_to_zero() {
        let mut cooldowns = Cooldowns::default();
        cooldowns.start(CooldownKind::Ranged, -5.0);
        cooldowns.tick(-100.0);
        assert!(cooldowns.is_ready(CooldownKind::Ranged));
        assert!(cooldowns.remaining(CooldownKind::Ranged) >= 0.0);
    }

    #[test]
    fn random_angle_is_within_one_turn() {
        let state = EnemyAiState::new(Archetype::Skirmisher);
        assert!((0.0..=TAU).contains(&state.circle_angle()));
        assert_eq!(state.phase(), None);
    }
}
