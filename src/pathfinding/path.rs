//! Completed route returned by a successful search.

use glam::Vec3;

use crate::grid::GridCell;

/// Ordered cell-centre waypoints from the start cell to the goal cell.
///
/// A `Path` always holds at least one waypoint. It is never edited after the
/// search builds it; followers keep an index into it instead.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    cells: Vec<GridCell>,
    waypoints: Vec<Vec3>,
    cost: f32,
}

impl Path {
    /// Builds a path from the visited cells, or `None` when `cells` is empty.
    #[must_use]
    pub fn from_cells(cells: Vec<GridCell>, cost: f32) -> Option<Self> {
        if cells.is_empty() {
            return None;
        }
        let waypoints = cells.iter().map(|cell| cell.centre()).collect();
        Some(Self {
            cells,
            waypoints,
            cost,
        })
    }

    /// Cells from start to goal.
    #[must_use]
    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    /// World-space waypoints, one per cell.
    #[must_use]
    pub fn waypoints(&self) -> &[Vec3] {
        &self.waypoints
    }

    /// Total step cost accumulated along the path.
    #[must_use]
    pub const fn cost(&self) -> f32 {
        self.cost
    }

    /// Number of waypoints, start cell included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Waypoint at `index`, if any.
    #[must_use]
    pub fn waypoint(&self, index: usize) -> Option<Vec3> {
        self.waypoints.get(index).copied()
    }

    /// Waypoint on the start cell.
    #[must_use]
    pub fn first(&self) -> Option<Vec3> {
        self.waypoints.first().copied()
    }

    /// Waypoint on the goal cell.
    #[must_use]
    pub fn last(&self) -> Option<Vec3> {
        self.waypoints.last().copied()
    }
}
