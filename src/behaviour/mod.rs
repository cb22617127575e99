//! Per-archetype decision making.
//!
//! Each archetype has one decision function. It reads the distance to the
//! player, its own cooldowns and (for the boss) its health, updates the
//! cooldowns and rolling angle it owns, and returns a movement intent plus
//! whether an attack fires this frame. Turning the intent into a displacement
//! is left to the controller, which owns steering and pathfinding.

mod boss;
mod melee;
mod skirmisher;

use glam::Vec3;

use crate::archetype::{AiState, Archetype};
use crate::config::LevelAiConfig;
use crate::state::EnemyAiState;

/// Current and maximum health as last reported by the combat layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vitality {
    /// Health remaining.
    pub current: f32,
    /// Health when unhurt.
    pub max: f32,
}

impl Vitality {
    /// Health of `current` out of `max`.
    #[must_use]
    pub const fn new(current: f32, max: f32) -> Self {
        Self { current, max }
    }

    /// Full health at `max`.
    #[must_use]
    pub const fn full(max: f32) -> Self {
        Self { current: max, max }
    }
}

impl Default for Vitality {
    fn default() -> Self {
        Self::full(100.0)
    }
}

/// Movement an archetype asks for this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Movement {
    /// Head for the player, routing around obstacles when the level allows.
    Chase {
        /// Units per second.
        speed: f32,
    },
    /// Back straight away from the player.
    Retreat {
        /// Units per second.
        speed: f32,
    },
    /// Head straight for an arbitrary point (strafe and orbit targets).
    Seek {
        /// Point to steer at.
        target: Vec3,
        /// Units per second.
        speed: f32,
    },
    /// One-frame burst straight at the player.
    Leap {
        /// Units per second.
        speed: f32,
    },
}

/// Output of a decision function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decision {
    /// How the enemy wants to move.
    pub movement: Movement,
    /// Whether an attack fires this frame.
    pub attack: bool,
}

/// What an enemy perceives on this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Situation {
    /// Enemy position.
    pub position: Vec3,
    /// Player position.
    pub player: Vec3,
    /// Distance from enemy to player.
    pub distance: f32,
    /// Frame length in seconds.
    pub delta_secs: f32,
    /// Enemy health, used by the boss.
    pub vitality: Vitality,
}

impl Situation {
    /// Snapshot with the enemy-to-player distance precomputed.
    #[must_use]
    pub fn new(position: Vec3, player: Vec3, delta_secs: f32, vitality: Vitality) -> Self {
        Self {
            position,
            player,
            distance: position.distance(player),
            delta_secs,
            vitality,
        }
    }
}

/// Runs the decision function for the enemy's archetype.
pub fn decide(state: &mut EnemyAiState, situation: &Situation, config: &LevelAiConfig) -> Decision {
    match state.archetype() {
        Archetype::Melee => melee::decide(state, situation, config),
        Archetype::Skirmisher => skirmisher::decide(state, situation, config),
        Archetype::Boss => boss::decide(state, situation, config),
    }
}

/// Coarse state shared by all archetypes.
///
/// In range means attacking, beyond twice the range means chasing, and in
/// between the movement intent decides.
#[must_use]
pub const fn classify(distance: f32, attack_range: f32, movement: &Movement) -> AiState {
    if distance <= attack_range {
        AiState::Attack
    } else if distance > attack_range * 2.0 {
        AiState::Chase
    } else if matches!(movement, Movement::Retreat { .. }) {
        AiState::Retreat
    } else {
        AiState::Chase
    }
}
