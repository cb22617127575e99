//! Tuning constants shared by the pathfinder, steering and behaviours.
//!
//! Distances are world units, angular rates are radians per second and
//! durations are milliseconds unless the name says otherwise.

/// Edge length of one obstacle grid cell.
pub const GRID_CELL_SIZE: f32 = 1.0;
/// Cells further than this from the origin on either axis are never expanded.
pub const MAP_HALF_EXTENT: i32 = 50;
/// Height at which path waypoints are emitted.
pub const WAYPOINT_HEIGHT: f32 = 0.5;
/// Node expansions allowed per search before giving up.
pub const DEFAULT_MAX_ITERATIONS: usize = 100;
/// Cost of stepping to a cardinal neighbour.
pub const CARDINAL_STEP_COST: f32 = 1.0;
/// Cost of stepping to a diagonal neighbour.
pub const DIAGONAL_STEP_COST: f32 = std::f32::consts::SQRT_2;

/// Distance below which a waypoint counts as reached.
pub const ARRIVAL_THRESHOLD: f32 = 1.0;
/// Minimum clock time between two path searches for one enemy.
pub const PATH_RECOMPUTE_INTERVAL_MS: f64 = 500.0;

/// Closest distance at which a melee enemy may leap.
pub const LEAP_MIN_DISTANCE: f32 = 3.0;
/// Furthest distance at which a melee enemy may leap.
pub const LEAP_MAX_DISTANCE: f32 = 10.0;
/// Burst speed applied on the frame a leap fires.
pub const LEAP_SPEED: f32 = 15.0;
/// Cooldown started by a leap.
pub const LEAP_COOLDOWN_MS: f32 = 3000.0;

/// Distance a ranged skirmisher tries to hold from the player.
pub const STANDOFF_DISTANCE: f32 = 8.0;
/// Half width of the band around [`STANDOFF_DISTANCE`] where it strafes.
pub const STANDOFF_DEAD_BAND: f32 = 2.0;
/// Fraction of chase speed used when backing away.
pub const RETREAT_SPEED_FACTOR: f32 = 0.8;
/// Radius of the skirmisher strafe circle.
pub const STRAFE_RADIUS: f32 = 2.0;
/// Rate at which the strafe angle turns.
pub const STRAFE_ANGULAR_RATE: f32 = 0.5;

/// Health fraction above which the boss stays in its opening phase.
pub const BOSS_PHASE_ONE_THRESHOLD: f32 = 0.66;
/// Health fraction above which the boss stays in its middle phase.
pub const BOSS_PHASE_TWO_THRESHOLD: f32 = 0.33;
/// Chase speed multiplier in boss phase one.
pub const BOSS_PHASE_ONE_SPEED_FACTOR: f32 = 0.7;
/// Chase speed multiplier in boss phase three.
pub const BOSS_PHASE_THREE_SPEED_FACTOR: f32 = 1.5;
/// Distance from the player at which the phase two boss circles.
pub const BOSS_ORBIT_RADIUS: f32 = 10.0;
/// Rate at which the boss orbit angle turns.
pub const BOSS_ORBIT_ANGULAR_RATE: f32 = 0.3;
/// Attack cooldown multiplier in boss phase two.
pub const BOSS_PHASE_TWO_COOLDOWN_FACTOR: f32 = 0.7;
/// Attack cooldown multiplier in boss phase three.
pub const BOSS_PHASE_THREE_COOLDOWN_FACTOR: f32 = 0.5;
