//! Enemy AI core: obstacle grid, A* pathfinding, steering and per-archetype
//! behaviour for melee, skirmisher and boss enemies.
//!
//! The frame entry point is [`update_enemy`]; [`EnemyDirector`] manages many
//! enemies without an ECS and [`EnemyAiPlugin`] drives them inside Bevy.
pub mod archetype;
pub mod behaviour;
pub mod clock;
pub mod config;
pub mod constants;
pub mod controller;
pub mod director;
pub mod grid;
pub mod logging;
pub mod numeric;
pub mod pathfinding;
pub mod plugin;
pub mod state;
pub mod steering;
pub mod vector_math;
pub use constants::*;

pub use archetype::{AiState, Archetype, BossPhase, UnknownArchetype};
pub use behaviour::Vitality;
pub use clock::{Clock, FrameInstant, SystemClock};
pub use config::{level_preset, ConfigError, LevelAiConfig, LevelPreset};
pub use controller::{update_enemy, AiOutput, AiWorld, EnemyFrame};
pub use director::{EnemyDirector, EnemyId, SpawnError};
pub use grid::{GridCell, ObstacleGrid};
pub use logging::init as init_logging;
pub use pathfinding::{find_path, search, Path, PathError, SearchLimits};
pub use plugin::{
    drive_enemy_ai_system, ActiveLevelAi, AiReport, EnemyAiPlugin, EnemyAttack, EnemyBrain,
    EnemyVitality, LevelObstacles, PlayerPosition,
};
pub use state::{CooldownKind, Cooldowns, EnemyAiState};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use stalker::prelude::*;
    //! ```

    pub use crate::update_enemy;
    pub use crate::AiWorld;
    pub use crate::Archetype;
    pub use crate::EnemyAiPlugin;
    pub use crate::EnemyAiState;
    pub use crate::EnemyFrame;
    pub use crate::FrameInstant;
    pub use crate::LevelAiConfig;
    pub use crate::ObstacleGrid;
}
