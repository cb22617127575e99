//! Ranged skirmisher: hold the standoff band, strafe inside it, shoot in range.

use super::{Decision, Movement, Situation};
use crate::config::LevelAiConfig;
use crate::state::{CooldownKind, EnemyAiState};
use crate::vector_math::orbit_point;
use crate::{
    RETREAT_SPEED_FACTOR, STANDOFF_DEAD_BAND, STANDOFF_DISTANCE, STRAFE_ANGULAR_RATE,
    STRAFE_RADIUS,
};

pub(super) fn decide(
    state: &mut EnemyAiState,
    situation: &Situation,
    config: &LevelAiConfig,
) -> Decision {
    let distance = situation.distance;

    let movement = if distance < STANDOFF_DISTANCE - STANDOFF_DEAD_BAND {
        Movement::Retreat {
            speed: config.chase_speed * RETREAT_SPEED_FACTOR,
        }
    } else if distance > STANDOFF_DISTANCE + STANDOFF_DEAD_BAND {
        Movement::Chase {
            speed: config.chase_speed,
        }
    } else {
        state.circle_angle += situation.delta_secs * STRAFE_ANGULAR_RATE;
        // The strafe circle is centred on the skirmisher itself, not the player.
        Movement::Seek {
            target: orbit_point(
                situation.position,
                STRAFE_RADIUS,
                state.circle_angle,
                situation.position.y,
            ),
            speed: config.chase_speed,
        }
    };

    let attack = distance <= config.attack_range && state.cooldowns.is_ready(CooldownKind::Ranged);
    if attack {
        state
            .cooldowns
            .start(CooldownKind::Ranged, config.attack_cooldown);
    }

    Decision { movement, attack }
}
