//! Obstacle layouts shared by pathfinding tests.

use stalker::{GridCell, ObstacleGrid};

/// Vertical wall along `x = wall_x` spanning `z` in `-half_span..=half_span`,
/// open only at `z = gap_z`.
///
/// # Examples
/// ```
/// use glam::Vec3;
/// use test_utils::wall_with_gap;
/// let grid = wall_with_gap(3, 5, 2);
/// assert_eq!(grid.len(), 10);
/// assert!(!grid.contains_world(Vec3::new(3.0, 0.0, 2.0)));
/// ```
pub fn wall_with_gap(wall_x: i32, half_span: i32, gap_z: i32) -> ObstacleGrid {
    let mut grid = ObstacleGrid::new();
    grid.extend(
        (-half_span..=half_span)
            .filter(|&z| z != gap_z)
            .map(|z| GridCell::new(wall_x, z).centre()),
    );
    grid
}

/// Ring of blocked cells surrounding `(x, z)` on all eight sides.
pub fn enclosure(x: i32, z: i32) -> ObstacleGrid {
    let mut grid = ObstacleGrid::new();
    for dx in -1..=1 {
        for dz in -1..=1 {
            if dx != 0 || dz != 0 {
                grid.add(GridCell::new(x + dx, z + dz).centre());
            }
        }
    }
    grid
}
