//! Behavioural test for melee attack pacing under repeated frame steps.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use glam::Vec3;
use rspec::block::{Context as Scenario, Suite};
use rspec::report::Report;
use rspec::{ConfigurationBuilder, Logger, Runner};
use stalker::{
    update_enemy, AiWorld, Archetype, CooldownKind, EnemyAiState, EnemyFrame, FrameInstant,
    LevelAiConfig, ObstacleGrid,
};

const ENEMY: Vec3 = Vec3::new(0.0, 0.5, 0.0);
const PLAYER: Vec3 = Vec3::new(1.5, 0.5, 0.0);

#[derive(Debug)]
struct Duel {
    state: EnemyAiState,
    config: LevelAiConfig,
    grid: ObstacleGrid,
    elapsed_ms: f64,
    triggers: Vec<f64>,
}

impl Duel {
    fn fresh() -> Self {
        Self {
            state: EnemyAiState::with_circle_angle(Archetype::Melee, 0.0),
            config: LevelAiConfig::default(),
            grid: ObstacleGrid::new(),
            elapsed_ms: 0.0,
            triggers: Vec::new(),
        }
    }

    fn step(&mut self, delta_secs: f32) {
        self.elapsed_ms += f64::from(delta_secs) * 1000.0;
        let clock = FrameInstant(self.elapsed_ms);
        let world = AiWorld {
            player: Some(PLAYER),
            config: &self.config,
            obstacles: &self.grid,
            clock: &clock,
        };
        let output = update_enemy(&mut self.state, &EnemyFrame::new(ENEMY, delta_secs), &world);
        if output.attack {
            self.triggers.push(self.elapsed_ms);
        }
    }
}

#[derive(Debug, Clone)]
struct DuelFixture {
    duel: Arc<Mutex<Duel>>,
}

impl DuelFixture {
    fn new() -> Self {
        Self {
            duel: Arc::new(Mutex::new(Duel::fresh())),
        }
    }

    fn guard(&self) -> MutexGuard<'_, Duel> {
        self.duel.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn reset(&self) {
        *self.guard() = Duel::fresh();
    }

    fn run_frames(&self, frames: usize, delta_secs: f32) {
        let mut duel = self.guard();
        for _ in 0..frames {
            duel.step(delta_secs);
        }
    }

    fn trigger_count(&self) -> usize {
        self.guard().triggers.len()
    }

    fn attack_cooldown(&self) -> f32 {
        self.guard().state.cooldowns().remaining(CooldownKind::Attack)
    }
}

/// Runs the duel examples one after another and fails on any failed example.
fn run_duel(suite: &Suite<DuelFixture>) {
    let config = ConfigurationBuilder::default()
        .parallel(false)
        .exit_on_failure(false)
        .build()
        .unwrap_or_else(|e| panic!("rspec configuration failed: {e}"));
    let report = Runner::new(config, vec![Arc::new(Logger::new(std::io::stdout()))]).run(suite);
    assert_eq!(report.get_failed(), 0, "duel examples failed");
}

#[test]
fn melee_attacks_respect_cooldown() {
    run_duel(&rspec::given(
        "a fresh melee enemy 1.5 units from the player",
        DuelFixture::new(),
        |scenario: &mut Scenario<DuelFixture>| {
            scenario.before_each(|fixture| {
                fixture.reset();
                fixture.run_frames(1, 0.0);
            });

            scenario.then("the first frame attacks and arms the cooldown", |fixture| {
                assert_eq!(fixture.trigger_count(), 1);
                assert!((fixture.attack_cooldown() - 1500.0).abs() < 1e-3);
            });

            scenario.when("one second of frames passes", |scenario| {
                scenario.before_each(|fixture| fixture.run_frames(20, 0.05));

                scenario.then("no second attack fires", |fixture| {
                    assert_eq!(fixture.trigger_count(), 1);
                    assert!(fixture.attack_cooldown() > 0.0);
                });

                scenario.when("another 600 ms passes", |scenario| {
                    scenario.before_each(|fixture| fixture.run_frames(12, 0.05));

                    scenario.then("exactly one more attack fires", |fixture| {
                        assert_eq!(fixture.trigger_count(), 2);
                    });
                });
            });
        },
    ));
}
