//! Utility helpers for tests.

pub mod clock;
pub mod grids;
pub mod paths;

pub use clock::ManualClock;
pub use grids::{enclosure, wall_with_gap};
pub use paths::assert_path_valid;
