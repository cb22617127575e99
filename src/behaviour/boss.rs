//! Three-phase boss.
//!
//! Phase one chases slowly and strikes inside its range. Phase two circles
//! the player at a fixed radius and fires on a shortened cooldown regardless
//! of distance. Phase three charges at full tilt and fires faster still.

use log::{info, warn};

use super::{Decision, Movement, Situation};
use crate::archetype::BossPhase;
use crate::config::LevelAiConfig;
use crate::state::{CooldownKind, EnemyAiState};
use crate::vector_math::orbit_point;
use crate::{
    BOSS_ORBIT_ANGULAR_RATE, BOSS_ORBIT_RADIUS, BOSS_PHASE_ONE_SPEED_FACTOR,
    BOSS_PHASE_THREE_COOLDOWN_FACTOR, BOSS_PHASE_THREE_SPEED_FACTOR,
    BOSS_PHASE_TWO_COOLDOWN_FACTOR,
};

pub(super) fn decide(
    state: &mut EnemyAiState,
    situation: &Situation,
    config: &LevelAiConfig,
) -> Decision {
    let phase = BossPhase::from_health(situation.vitality.current, situation.vitality.max);
    record_phase(state, phase);

    let (movement, in_reach, cooldown) = match phase {
        BossPhase::One => (
            Movement::Chase {
                speed: config.chase_speed * BOSS_PHASE_ONE_SPEED_FACTOR,
            },
            situation.distance <= config.attack_range,
            config.attack_cooldown,
        ),
        BossPhase::Two => {
            state.circle_angle += situation.delta_secs * BOSS_ORBIT_ANGULAR_RATE;
            (
                Movement::Seek {
                    target: orbit_point(
                        situation.player,
                        BOSS_ORBIT_RADIUS,
                        state.circle_angle,
                        situation.position.y,
                    ),
                    speed: config.chase_speed,
                },
                true,
                config.attack_cooldown * BOSS_PHASE_TWO_COOLDOWN_FACTOR,
            )
        }
        BossPhase::Three => (
            Movement::Chase {
                speed: config.chase_speed * BOSS_PHASE_THREE_SPEED_FACTOR,
            },
            true,
            config.attack_cooldown * BOSS_PHASE_THREE_COOLDOWN_FACTOR,
        ),
    };

    let attack = in_reach && state.cooldowns.is_ready(CooldownKind::Attack);
    if attack {
        state.cooldowns.start(CooldownKind::Attack, cooldown);
    }

    Decision { movement, attack }
}

fn record_phase(state: &mut EnemyAiState, phase: BossPhase) {
    match state.phase {
        Some(previous) if phase < previous => {
            warn!(
                "boss phase regressed from {} to {}",
                previous.number(),
                phase.number()
            );
        }
        Some(previous) if phase != previous => {
            info!("boss entered phase {}", phase.number());
        }
        _ => {}
    }
    state.phase = Some(phase);
}
