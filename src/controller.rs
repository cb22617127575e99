//! Per-frame AI update for one enemy.
//!
//! [`update_enemy`] is the single entry point the entity layer calls each
//! frame. It ticks cooldowns, asks the archetype's behaviour for an intent,
//! resolves that intent into a displacement (replanning through the
//! pathfinder when chasing and allowed by the throttle) and reports the
//! resulting movement, facing and attack trigger.

use glam::Vec3;
use log::debug;

use crate::archetype::AiState;
use crate::behaviour::{self, Movement, Situation, Vitality};
use crate::clock::Clock;
use crate::config::LevelAiConfig;
use crate::grid::ObstacleGrid;
use crate::numeric::secs_to_millis;
use crate::pathfinding::{find_path, Path};
use crate::state::EnemyAiState;
use crate::steering::steer;
use crate::vector_math::{direction_to, yaw_towards};
use crate::DEFAULT_MAX_ITERATIONS;

/// Per-frame facts about the enemy being updated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyFrame {
    /// Enemy position before this frame's movement.
    pub position: Vec3,
    /// Enemy health.
    pub vitality: Vitality,
    /// Frame length in seconds.
    pub delta_secs: f32,
}

impl EnemyFrame {
    /// Frame for an unhurt enemy.
    #[must_use]
    pub fn new(position: Vec3, delta_secs: f32) -> Self {
        Self {
            position,
            vitality: Vitality::default(),
            delta_secs,
        }
    }

    /// Same frame with the given health.
    #[must_use]
    pub const fn with_vitality(mut self, vitality: Vitality) -> Self {
        self.vitality = vitality;
        self
    }
}

/// Shared, read-only context for every enemy updated this frame.
#[derive(Clone, Copy)]
pub struct AiWorld<'a> {
    /// Player position, or `None` while no player exists.
    pub player: Option<Vec3>,
    /// Tuning for the current level.
    pub config: &'a LevelAiConfig,
    /// Blocked cells for the current level.
    pub obstacles: &'a ObstacleGrid,
    /// Time source for the replan throttle.
    pub clock: &'a dyn Clock,
}

/// What the entity layer should apply after an update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiOutput {
    /// Movement applied this frame.
    pub displacement: Vec3,
    /// Position after `displacement`.
    pub position: Vec3,
    /// Yaw in radians about the vertical axis.
    pub facing: f32,
    /// Whether an attack fires this frame.
    pub attack: bool,
    /// Coarse state for animation and UI.
    pub state: AiState,
    /// Whether a path search ran this frame.
    pub replanned: bool,
}

impl AiOutput {
    const fn idle(position: Vec3, facing: f32) -> Self {
        Self {
            displacement: Vec3::ZERO,
            position,
            facing,
            attack: false,
            state: AiState::Idle,
            replanned: false,
        }
    }
}

/// Advances one enemy by one frame.
///
/// Never fails: a missing player yields an idle output, and a path search
/// that gives up falls back to moving straight at the player.
pub fn update_enemy(state: &mut EnemyAiState, frame: &EnemyFrame, world: &AiWorld<'_>) -> AiOutput {
    let Some(player) = world.player else {
        return AiOutput::idle(frame.position, state.facing);
    };
    let delta_secs = if frame.delta_secs.is_finite() {
        frame.delta_secs.max(0.0)
    } else {
        0.0
    };

    state.cooldowns.tick(secs_to_millis(delta_secs));

    let situation = Situation::new(frame.position, player, delta_secs, frame.vitality);
    let decision = behaviour::decide(state, &situation, world.config);

    let mut replanned = false;
    let displacement = match decision.movement {
        Movement::Chase { speed } => {
            replanned = replan_if_due(state, frame.position, player, world);
            if world.config.pathfinding_enabled {
                state.follower.step(frame.position, player, speed, delta_secs)
            } else {
                steer(frame.position, player, speed, delta_secs)
            }
        }
        Movement::Retreat { speed } => {
            direction_to(player, frame.position) * speed * delta_secs
        }
        Movement::Seek { target, speed } => steer(frame.position, target, speed, delta_secs),
        Movement::Leap { speed } => steer(frame.position, player, speed, delta_secs),
    };

    if let Some(yaw) = yaw_towards(player - frame.position) {
        state.facing = yaw;
    }

    AiOutput {
        displacement,
        position: frame.position + displacement,
        facing: state.facing,
        attack: decision.attack,
        state: behaviour::classify(
            situation.distance,
            world.config.attack_range,
            &decision.movement,
        ),
        replanned,
    }
}

fn replan_if_due(state: &mut EnemyAiState, position: Vec3, player: Vec3, world: &AiWorld<'_>) -> bool {
    if !world.config.pathfinding_enabled || !state.throttle.try_acquire(world.clock) {
        return false;
    }
    let path = find_path(world.obstacles, position, player, DEFAULT_MAX_ITERATIONS);
    debug!(
        "{} replanned towards {player:?}: {} waypoints",
        state.archetype(),
        path.as_ref().map_or(0, Path::len)
    );
    state.follower.adopt(path);
    state.replans += 1;
    true
}
