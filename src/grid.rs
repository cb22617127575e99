//! Obstacle grid used by the pathfinder.
//!
//! The ground plane is discretised into square cells on X and Z. A cell is
//! either blocked or free; blocked cells are never entered by a search. The
//! grid is an ordinary value owned by whoever loads the level and lent to the
//! pathfinder, so several levels (or tests) never share obstacles by accident.

use glam::Vec3;
use hashbrown::HashSet;
use log::debug;

use crate::numeric::{grid_index, grid_to_world};
use crate::{CARDINAL_STEP_COST, DIAGONAL_STEP_COST, GRID_CELL_SIZE, WAYPOINT_HEIGHT};

/// Grid coordinate on the XZ plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct GridCell {
    /// Column along the world X axis.
    pub x: i32,
    /// Row along the world Z axis.
    pub z: i32,
}

impl From<(i32, i32)> for GridCell {
    fn from((x, z): (i32, i32)) -> Self {
        Self { x, z }
    }
}

/// Offsets to the eight neighbours with the cost of stepping to each.
const NEIGHBOUR_STEPS: [(i32, i32, f32); 8] = [
    (1, 0, CARDINAL_STEP_COST),
    (-1, 0, CARDINAL_STEP_COST),
    (0, 1, CARDINAL_STEP_COST),
    (0, -1, CARDINAL_STEP_COST),
    (1, 1, DIAGONAL_STEP_COST),
    (1, -1, DIAGONAL_STEP_COST),
    (-1, 1, DIAGONAL_STEP_COST),
    (-1, -1, DIAGONAL_STEP_COST),
];

impl GridCell {
    /// Cell at column `x`, row `z`.
    #[must_use]
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Cell containing `position`, found by rounding each planar coordinate.
    ///
    /// # Examples
    /// ```
    /// use glam::Vec3;
    /// use stalker::GridCell;
    /// assert_eq!(GridCell::from_world(Vec3::new(1.6, 9.0, -0.4)), GridCell::new(2, 0));
    /// ```
    #[must_use]
    pub fn from_world(position: Vec3) -> Self {
        Self {
            x: grid_index(position.x, GRID_CELL_SIZE),
            z: grid_index(position.z, GRID_CELL_SIZE),
        }
    }

    /// World-space waypoint at the centre of this cell.
    #[must_use]
    pub fn centre(self) -> Vec3 {
        Vec3::new(
            grid_to_world(self.x, GRID_CELL_SIZE),
            WAYPOINT_HEIGHT,
            grid_to_world(self.z, GRID_CELL_SIZE),
        )
    }

    /// Manhattan distance to `other` in cells.
    #[expect(
        clippy::cast_precision_loss,
        reason = "Cell distances are bounded by the map extent."
    )]
    #[must_use]
    pub fn manhattan(self, other: Self) -> f32 {
        (u64::from(self.x.abs_diff(other.x)) + u64::from(self.z.abs_diff(other.z))) as f32
    }

    /// Whether the cell lies inside the square of the given half extent.
    ///
    /// A negative extent contains nothing.
    #[must_use]
    pub const fn within(self, half_extent: i32) -> bool {
        if half_extent < 0 {
            return false;
        }
        let limit = half_extent.unsigned_abs();
        self.x.unsigned_abs() <= limit && self.z.unsigned_abs() <= limit
    }

    /// The surrounding cells, cardinal first, each with its step cost.
    ///
    /// Neighbours that would fall outside the `i32` range are skipped, so a
    /// cell on the edge of the coordinate space has fewer than eight.
    pub fn neighbours(self) -> impl Iterator<Item = (Self, f32)> {
        NEIGHBOUR_STEPS.into_iter().filter_map(move |(dx, dz, cost)| {
            let x = self.x.checked_add(dx)?;
            let z = self.z.checked_add(dz)?;
            Some((Self::new(x, z), cost))
        })
    }
}

/// Set of impassable cells for the active level.
#[derive(Debug, Clone, Default)]
pub struct ObstacleGrid {
    blocked: HashSet<GridCell>,
}

impl ObstacleGrid {
    /// Grid with every cell free.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Blocks the cell containing `position`.
    ///
    /// Returns `true` if the cell was previously free.
    pub fn add(&mut self, position: Vec3) -> bool {
        self.blocked.insert(GridCell::from_world(position))
    }

    /// Frees the cell containing `position`.
    ///
    /// Returns `true` if the cell had been blocked.
    pub fn remove(&mut self, position: Vec3) -> bool {
        self.blocked.remove(&GridCell::from_world(position))
    }

    /// Frees every cell, typically on level teardown.
    pub fn clear(&mut self) {
        debug!("clearing {} obstacle cells", self.blocked.len());
        self.blocked.clear();
    }

    /// Whether `cell` is blocked.
    #[must_use]
    pub fn is_blocked(&self, cell: GridCell) -> bool {
        self.blocked.contains(&cell)
    }

    /// Whether the cell containing `position` is blocked.
    #[must_use]
    pub fn contains_world(&self, position: Vec3) -> bool {
        self.is_blocked(GridCell::from_world(position))
    }

    /// Blocks every cell covered by an axis-aligned volume on the XZ plane.
    ///
    /// `half_extents` are measured from `centre`; only X and Z are used. A
    /// volume smaller than a cell still blocks the cell its centre falls in.
    /// Returns how many cells became blocked.
    ///
    /// # Examples
    /// ```
    /// use glam::Vec3;
    /// use stalker::ObstacleGrid;
    /// let mut grid = ObstacleGrid::new();
    /// let added = grid.add_footprint(Vec3::new(0.0, 1.0, 0.0), Vec3::new(1.0, 1.0, 0.2));
    /// assert_eq!(added, 3);
    /// ```
    pub fn add_footprint(&mut self, centre: Vec3, half_extents: Vec3) -> usize {
        let half = half_extents.abs();
        let min = GridCell::from_world(centre - half);
        let max = GridCell::from_world(centre + half);
        let before = self.blocked.len();
        for x in min.x..=max.x {
            for z in min.z..=max.z {
                self.blocked.insert(GridCell::new(x, z));
            }
        }
        let added = self.blocked.len() - before;
        debug!("blocking volume at {centre:?} added {added} cells");
        added
    }

    /// Number of blocked cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.blocked.len()
    }

    /// Whether no cell is blocked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocked.is_empty()
    }

    /// Iterates blocked cells in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = GridCell> + '_ {
        self.blocked.iter().copied()
    }
}

impl Extend<Vec3> for ObstacleGrid {
    fn extend<I: IntoIterator<Item = Vec3>>(&mut self, positions: I) {
        self.blocked
            .extend(positions.into_iter().map(GridCell::from_world));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MAP_HALF_EXTENT;
    use rstest::rstest;

    #[test]
    fn add_and_remove_are_idempotent() {
        let mut grid = ObstacleGrid::new();
        assert!(grid.add(Vec3::new(3.2, 0.0, 4.9)));
        assert!(!grid.add(Vec3::new(2.8, 5.0, 5.1)));
        assert_eq!(grid.len(), 1);
        assert!(grid.is_blocked(GridCell::new(3, 5)));

        assert!(grid.remove(Vec3::new(3.0, 0.0, 5.0)));
        assert!(!grid.remove(Vec3::new(3.0, 0.0, 5.0)));
        assert!(grid.is_empty());
    }

    #[test]
    fn clear_frees_everything() {
        let mut grid = ObstacleGrid::new();
        grid.extend([Vec3::ZERO, Vec3::X, Vec3::Z]);
        assert_eq!(grid.len(), 3);
        grid.clear();
        assert!(grid.is_empty());
        assert!(!grid.contains_world(Vec3::ZERO));
    }

    #[test]
    fn footprint_covers_rectangle() {
        let mut grid = ObstacleGrid::new();
        let added = grid.add_footprint(Vec3::new(5.0, 0.0, 5.0), Vec3::new(1.0, 3.0, 2.0));
        assert_eq!(added, 15);
        assert!(grid.is_blocked(GridCell::new(4, 3)));
        assert!(grid.is_blocked(GridCell::new(6, 7)));
        assert!(!grid.is_blocked(GridCell::new(7, 5)));
        assert_eq!(grid.add_footprint(Vec3::new(5.0, 0.0, 5.0), Vec3::ZERO), 0);
    }

    #[rstest]
    #[case::origin(GridCell::new(0, 0), true)]
    #[case::edge(GridCell::new(50, -50), true)]
    #[case::outside(GridCell::new(51, 0), false)]
    #[case::most_negative(GridCell::new(i32::MIN, 0), false)]
    #[case::most_positive(GridCell::new(0, i32::MAX), false)]
    fn bounds_are_inclusive(#[case] cell: GridCell, #[case] inside: bool) {
        assert_eq!(cell.within(MAP_HALF_EXTENT), inside);
    }

    #[test]
    fn neighbours_cost_diagonals_more() {
        let around: Vec<_> = GridCell::new(0, 0).neighbours().collect();
        assert_eq!(around.len(), 8);
        let diagonal = around
            .iter()
            .find(|(cell, _)| *cell == GridCell::new(1, 1))
            .map(|(_, cost)| *cost);
        assert_eq!(diagonal, Some(DIAGONAL_STEP_COST));
    }

    #[test]
    fn neighbours_stop_at_the_coordinate_limit() {
        let corner = GridCell::new(i32::MAX, i32::MIN);
        let around: Vec<_> = corner.neighbours().map(|(cell, _)| cell).collect();
        assert_eq!(
            around,
            vec![
                GridCell::new(i32::MAX - 1, i32::MIN),
                GridCell::new(i32::MAX, i32::MIN + 1),
                GridCell::new(i32::MAX - 1, i32::MIN + 1),
            ]
        );
    }

    #[test]
    fn manhattan_spans_the_whole_coordinate_space() {
        let far = GridCell::new(i32::MIN, i32::MIN).manhattan(GridCell::new(i32::MAX, i32::MAX));
        assert!(far.is_finite());
        assert!(far > 8.0e9);
    }
}
