//! Enemy archetypes and the coarse states reported to the entity layer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{BOSS_PHASE_ONE_THRESHOLD, BOSS_PHASE_TWO_THRESHOLD};

/// Closed set of enemy behaviour profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    /// Fast melee attacker that closes distance with leaps.
    Melee,
    /// Ranged attacker that holds a standoff distance and strafes.
    Skirmisher,
    /// Multi-phase boss whose tactics escalate as its health drops.
    Boss,
}

impl Archetype {
    /// Every archetype, in spawn-table order.
    pub const ALL: [Self; 3] = [Self::Melee, Self::Skirmisher, Self::Boss];

    /// Lower-case tag used in level data and logs.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Melee => "melee",
            Self::Skirmisher => "skirmisher",
            Self::Boss => "boss",
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Raised when a spawn request names an archetype that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown enemy archetype `{0}`")]
pub struct UnknownArchetype(pub String);

impl FromStr for Archetype {
    type Err = UnknownArchetype;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|archetype| archetype.tag().eq_ignore_ascii_case(tag.trim()))
            .ok_or_else(|| UnknownArchetype(tag.to_owned()))
    }
}

/// Coarse behaviour state exposed for animation and UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum AiState {
    /// No player to react to.
    #[default]
    Idle,
    /// Closing on the player.
    Chase,
    /// Player within attack range.
    Attack,
    /// Backing away to regain standoff distance.
    Retreat,
}

/// Boss difficulty tier derived from remaining health.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum BossPhase {
    /// Above two thirds of its health.
    One = 1,
    /// Between one and two thirds of its health.
    Two = 2,
    /// One third of its health or less.
    Three = 3,
}

impl BossPhase {
    /// Phase for the given health, using strict thresholds at 66 % and 33 %.
    ///
    /// A non-positive `max` counts as no health left.
    ///
    /// # Examples
    /// ```
    /// use stalker::BossPhase;
    /// assert_eq!(BossPhase::from_health(70.0, 100.0), BossPhase::One);
    /// assert_eq!(BossPhase::from_health(66.0, 100.0), BossPhase::Two);
    /// assert_eq!(BossPhase::from_health(33.0, 100.0), BossPhase::Three);
    /// ```
    #[must_use]
    pub fn from_health(current: f32, max: f32) -> Self {
        let ratio = if max > 0.0 { current / max } else { 0.0 };
        if ratio > BOSS_PHASE_ONE_THRESHOLD {
            Self::One
        } else if ratio > BOSS_PHASE_TWO_THRESHOLD {
            Self::Two
        } else {
            Self::Three
        }
    }

    /// Phase number for logs and UI.
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("melee", Archetype::Melee)]
    #[case(" Skirmisher ", Archetype::Skirmisher)]
    #[case("BOSS", Archetype::Boss)]
    fn parses_tags(#[case] tag: &str, #[case] expected: Archetype) {
        assert_eq!(tag.parse::<Archetype>(), Ok(expected));
    }

    #[test]
    fn rejects_unknown_tag() {
        assert_eq!(
            "sniper".parse::<Archetype>(),
            Err(UnknownArchetype("sniper".to_owned()))
        );
    }

    #[rstest]
    #[case::full(5000.0, BossPhase::One)]
    #[case::just_above_two_thirds(3350.0, BossPhase::One)]
    #[case::two_thirds(3300.0, BossPhase::Two)]
    #[case::one_third(1650.0, BossPhase::Three)]
    #[case::dead(0.0, BossPhase::Three)]
    fn phase_thresholds(#[case] health: f32, #[case] expected: BossPhase) {
        assert_eq!(BossPhase::from_health(health, 5000.0), expected);
    }

    #[test]
    fn zero_max_health_is_final_phase() {
        assert_eq!(BossPhase::from_health(10.0, 0.0), BossPhase::Three);
    }
}
