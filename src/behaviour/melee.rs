//! Fast melee archetype: chase, leap from mid range, strike on contact.

use super::{Decision, Movement, Situation};
use crate::config::LevelAiConfig;
use crate::state::{CooldownKind, EnemyAiState};
use crate::{LEAP_COOLDOWN_MS, LEAP_MAX_DISTANCE, LEAP_MIN_DISTANCE, LEAP_SPEED};

pub(super) fn decide(
    state: &mut EnemyAiState,
    situation: &Situation,
    config: &LevelAiConfig,
) -> Decision {
    let distance = situation.distance;
    let leap_window = distance > LEAP_MIN_DISTANCE && distance < LEAP_MAX_DISTANCE;

    let movement = if config.leap_attack && leap_window && state.cooldowns.is_ready(CooldownKind::Leap)
    {
        state.cooldowns.start(CooldownKind::Leap, LEAP_COOLDOWN_MS);
        Movement::Leap { speed: LEAP_SPEED }
    } else {
        Movement::Chase {
            speed: config.chase_speed,
        }
    };

    // A leap that lands in range may strike on the same frame, but still only
    // when the attack timer allows it.
    let attack = distance < config.attack_range && state.cooldowns.is_ready(CooldownKind::Attack);
    if attack {
        state
            .cooldowns
            .start(CooldownKind::Attack, config.attack_cooldown);
    }

    Decision { movement, attack }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archetype::Archetype;
    use crate::behaviour::Vitality;
    use glam::Vec3;
    use rstest::rstest;

    fn situation(distance: f32) -> Situation {
        Situation::new(Vec3::ZERO, Vec3::new(distance, 0.0, 0.0), 0.016, Vitality::default())
    }

    fn melee() -> EnemyAiState {
        EnemyAiState::with_circle_angle(Archetype::Melee, 0.0)
    }

    #[rstest]
    #[case::too_close(3.0, false)]
    #[case::mid_range(6.0, true)]
    #[case::too_far(10.0, false)]
    fn leaps_only_inside_window(#[case] distance: f32, #[case] leaps: bool) {
        let mut state = melee();
        let decision = decide(&mut state, &situation(distance), &LevelAiConfig::default());
        assert_eq!(matches!(decision.movement, Movement::Leap { .. }), leaps);
        assert_eq!(!state.cooldowns().is_ready(CooldownKind::Leap), leaps);
    }

    #[test]
    fn leap_respects_its_cooldown() {
        let mut state = melee();
        let config = LevelAiConfig::default();
        decide(&mut state, &situation(6.0), &config);
        let second = decide(&mut state, &situation(6.0), &config);
        assert_eq!(second.movement, Movement::Chase { speed: config.chase_speed });
    }

    #[test]
    fn leap_disabled_by_level() {
        let mut state = melee();
        let config = LevelAiConfig {
            leap_attack: false,
            ..LevelAiConfig::default()
        };
        let decision = decide(&mut state, &situation(6.0), &config);
        assert!(matches!(decision.movement, Movement::Chase { .. }));
    }

    #[rstest]
    #[case::inside(1.5, true)]
    #[case::on_boundary(2.0, false)]
    #[case::outside(2.5, false)]
    fn attack_needs_strictly_inside_range(#[case] distance: f32, #[case] fires: bool) {
        let mut state = melee();
        let decision = decide(&mut state, &situation(distance), &LevelAiConfig::default());
        assert_eq!(decision.attack, fires);
    }

    #[test]
    fn leap_and_attack_share_a_frame() {
        let mut state = melee();
        let config = LevelAiConfig {
            attack_range: 5.0,
            ..LevelAiConfig::default()
        };
        let decision = decide(&mut state, &situation(4.0), &config);
        assert!(matches!(decision.movement, Movement::Leap { .. }));
        assert!(decision.attack);
    }
}
