//! Bevy plugin driving enemy AI from the ECS.
//!
//! The plugin owns three resources (player position, level tuning and the
//! obstacle grid) and one `Update` system that runs [`update_enemy`] for
//! every entity carrying an [`EnemyBrain`]. Attacks are surfaced as
//! [`EnemyAttack`] events for whatever combat layer is listening.

use bevy::ecs::prelude::On;
use bevy::prelude::*;
use log::{debug, warn};

use crate::archetype::Archetype;
use crate::behaviour::Vitality;
use crate::clock::FrameInstant;
use crate::config::{level_preset, LevelAiConfig};
use crate::controller::{update_enemy, AiOutput, AiWorld, EnemyFrame};
use crate::grid::ObstacleGrid;
use crate::state::EnemyAiState;

/// Current player position; `None` while no player is spawned.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Deref, DerefMut)]
pub struct PlayerPosition(pub Option<Vec3>);

/// Tuning for the level currently being played.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Deref, DerefMut)]
pub struct ActiveLevelAi(pub LevelAiConfig);

/// Blocking cells registered by level setup.
#[derive(Resource, Debug, Default, Clone, Deref, DerefMut)]
pub struct LevelObstacles(pub ObstacleGrid);

/// AI state carried by an enemy entity.
#[derive(Component, Debug, Clone, Deref, DerefMut)]
pub struct EnemyBrain(pub EnemyAiState);

impl EnemyBrain {
    /// Fresh brain with a random starting circle angle.
    #[must_use]
    pub fn new(archetype: Archetype) -> Self {
        Self(EnemyAiState::new(archetype))
    }
}

/// Health read for boss phase selection. Enemies without it count as unhurt.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Deref, DerefMut)]
pub struct EnemyVitality(pub Vitality);

/// Last output produced for an enemy, for animation and UI.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Deref)]
pub struct AiReport(pub Option<AiOutput>);

/// Raised on every frame an enemy's attack trigger fires.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct EnemyAttack {
    /// Entity whose attack fired.
    pub enemy: Entity,
    /// Archetype of the attacker.
    pub archetype: Archetype,
    /// Attacker position after this frame's movement.
    pub position: Vec3,
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value for Events V2."
)]
fn log_enemy_attack(event: On<EnemyAttack>) {
    let EnemyAttack {
        enemy,
        archetype,
        position,
    } = event.event();
    debug!("{archetype} {enemy:?} attacked from {position:?}");
}

/// Runs one AI frame for every enemy and applies the result to its transform.
///
/// Movement follows virtual time so pausing or slowing the game slows the
/// enemies. Path searches are paced on real time so a sped-up game never
/// searches more often than the recompute interval allows.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy system parameters use `Res<T>` by value."
)]
pub fn drive_enemy_ai_system(
    mut commands: Commands,
    time: Res<Time>,
    real_time: Res<Time<Real>>,
    player: Res<PlayerPosition>,
    level: Res<ActiveLevelAi>,
    obstacles: Res<LevelObstacles>,
    mut enemies: Query<(
        Entity,
        &mut EnemyBrain,
        &mut Transform,
        Option<&EnemyVitality>,
        Option<&mut AiReport>,
    )>,
) {
    let clock = FrameInstant(real_time.elapsed_secs_f64() * 1000.0);
    let world = AiWorld {
        player: player.0,
        config: &level.0,
        obstacles: &obstacles.0,
        clock: &clock,
    };

    for (entity, mut brain, mut transform, health, slot) in &mut enemies {
        let vitality = health.map_or_else(Vitality::default, |h| h.0);
        let frame =
            EnemyFrame::new(transform.translation, time.delta_secs()).with_vitality(vitality);
        let output = update_enemy(&mut brain.0, &frame, &world);

        transform.translation = output.position;
        transform.rotation = Quat::from_rotation_y(output.facing);
        if let Some(mut report) = slot {
            report.0 = Some(output);
        }
        if output.attack {
            commands.trigger(EnemyAttack {
                enemy: entity,
                archetype: brain.archetype(),
                position: output.position,
            });
        }
    }
}

/// Installs the enemy AI resources, system and attack logging.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnemyAiPlugin {
    level: Option<u32>,
}

impl EnemyAiPlugin {
    /// Plugin that starts with the built-in tuning for `level`.
    #[must_use]
    pub const fn for_level(level: u32) -> Self {
        Self { level: Some(level) }
    }

    fn initial_config(&self) -> LevelAiConfig {
        let Some(level) = self.level else {
            return LevelAiConfig::default();
        };
        level_preset(level).map_or_else(
            || {
                warn!("no AI preset for level {level}; using defaults");
                LevelAiConfig::default()
            },
            |preset| preset.ai,
        )
    }
}

impl Plugin for EnemyAiPlugin {
    fn build(&self, app: &mut App) {
        app.add_observer(log_enemy_attack);
        app.init_resource::<PlayerPosition>();
        app.init_resource::<LevelObstacles>();
        app.insert_resource(ActiveLevelAi(self.initial_config()));
        app.add_systems(Update, drive_enemy_ai_system);
    }
}
