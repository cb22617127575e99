//! Per-level AI tuning.
//!
//! Levels hand the AI core an immutable [`LevelAiConfig`]. Configs arrive
//! either from the built-in presets or as JSON written by level designers,
//! and are validated once on load so the frame loop never has to.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::archetype::Archetype;

/// Tuning shared by every enemy on a level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelAiConfig {
    /// Base movement speed in units per second.
    pub chase_speed: f32,
    /// Distance at which range-gated attacks may fire.
    pub attack_range: f32,
    /// Base attack cooldown in milliseconds.
    pub attack_cooldown: f32,
    /// When `false`, chasing enemies never search and always walk straight.
    pub pathfinding_enabled: bool,
    /// Allows melee enemies to leap.
    #[serde(default = "enabled")]
    pub leap_attack: bool,
}

const fn enabled() -> bool {
    true
}

impl Default for LevelAiConfig {
    fn default() -> Self {
        Self {
            chase_speed: 3.5,
            attack_range: 2.0,
            attack_cooldown: 1500.0,
            pathfinding_enabled: true,
            leap_attack: true,
        }
    }
}

/// Failures while loading a [`LevelAiConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document was not valid JSON for this schema.
    #[error("failed to parse level AI config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A numeric field was negative or not finite.
    #[error("level AI config field `{field}` has invalid value {value}")]
    InvalidValue {
        /// Name of the offending field.
        field: &'static str,
        /// Value that was rejected.
        value: f32,
    },
}

impl LevelAiConfig {
    /// Parses and validates a JSON config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::InvalidValue`] when validation fails.
    ///
    /// # Examples
    /// ```
    /// use stalker::LevelAiConfig;
    /// let config = LevelAiConfig::from_json(
    ///     r#"{"chaseSpeed": 4.5, "attackRange": 8, "attackCooldown": 2000, "pathfindingEnabled": true}"#,
    /// )?;
    /// assert!(config.leap_attack);
    /// # Ok::<(), stalker::config::ConfigError>(())
    /// ```
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that speeds, ranges and cooldowns are finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns the first offending field as [`ConfigError::InvalidValue`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("chaseSpeed", self.chase_speed),
            ("attackRange", self.attack_range),
            ("attackCooldown", self.attack_cooldown),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidValue { field, value });
            }
        }
        Ok(())
    }
}

/// Built-in level definition: which archetype spawns and how it is tuned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelPreset {
    /// One-based level number.
    pub level: u32,
    /// Archetype the level spawns.
    pub archetype: Archetype,
    /// AI tuning for the level.
    pub ai: LevelAiConfig,
}

/// Returns the shipped tuning for `level`, or `None` past the last level.
#[must_use]
pub const fn level_preset(level: u32) -> Option<LevelPreset> {
    let (archetype, ai) = match level {
        1 => (
            Archetype::Melee,
            LevelAiConfig {
                chase_speed: 3.5,
                attack_range: 2.0,
                attack_cooldown: 1500.0,
                pathfinding_enabled: true,
                leap_attack: true,
            },
        ),
        2 => (
            Archetype::Skirmisher,
            LevelAiConfig {
                chase_speed: 4.5,
                attack_range: 8.0,
                attack_cooldown: 2000.0,
                pathfinding_enabled: true,
                leap_attack: false,
            },
        ),
        3 => (
            Archetype::Boss,
            LevelAiConfig {
                chase_speed: 2.5,
                attack_range: 12.0,
                attack_cooldown: 3000.0,
                pathfinding_enabled: true,
                leap_attack: false,
            },
        ),
        _ => return None,
    };
    Some(LevelPreset {
        level,
        archetype,
        ai,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::melee(1, Archetype::Melee)]
    #[case::skirmisher(2, Archetype::Skirmisher)]
    #[case::boss(3, Archetype::Boss)]
    fn presets_cover_each_archetype(#[case] level: u32, #[case] archetype: Archetype) {
        let preset = level_preset(level);
        assert_eq!(preset.map(|p| p.archetype), Some(archetype));
        assert!(preset.is_some_and(|p| p.ai.validate().is_ok()));
    }

    #[test]
    fn unknown_level_has_no_preset() {
        assert!(level_preset(0).is_none());
        assert!(level_preset(4).is_none());
    }

    #[test]
    fn json_round_trips_through_camel_case() -> anyhow::Result<()> {
        let original = LevelAiConfig {
            pathfinding_enabled: false,
            ..LevelAiConfig::default()
        };
        let text = serde_json::to_string(&original)?;
        assert!(text.contains("\"pathfindingEnabled\":false"));
        assert_eq!(LevelAiConfig::from_json(&text)?, original);
        Ok(())
    }

    #[rstest]
    #[case::negative_speed(r#"{"chaseSpeed": -1, "attackRange": 2, "attackCooldown": 10, "pathfindingEnabled": true}"#, "chaseSpeed")]
    #[case::negative_cooldown(r#"{"chaseSpeed": 1, "attackRange": 2, "attackCooldown": -10, "pathfindingEnabled": true}"#, "attackCooldown")]
    fn rejects_negative_values(#[case] source: &str, #[case] expected_field: &str) {
        match LevelAiConfig::from_json(source) {
            Err(ConfigError::InvalidValue { field, .. }) => assert_eq!(field, expected_field),
            other => panic!("expected InvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn rejects_missing_fields() {
        let result = LevelAiConfig::from_json(r#"{"chaseSpeed": 1}"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
