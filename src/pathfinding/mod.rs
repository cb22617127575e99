//! Bounded A* search over the obstacle grid.
//!
//! The search runs on the 8-connected grid with unit cardinal steps and √2
//! diagonal steps, guided by the Manhattan distance to the goal. It stops on
//! the first expansion of the goal cell, when the open set runs dry, or once
//! the expansion budget is spent. Failure is never fatal for callers: an
//! enemy that gets no path simply walks straight at its goal.

mod node;
mod path;

use glam::Vec3;
use log::debug;
use thiserror::Error;

use crate::grid::{GridCell, ObstacleGrid};
use crate::{DEFAULT_MAX_ITERATIONS, MAP_HALF_EXTENT};

pub use node::PathNode;
pub use path::Path;

use node::SearchTree;

/// Bounds applied to a single search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Maximum number of node expansions.
    pub max_iterations: usize,
    /// Cells with `|x|` or `|z|` above this are pruned.
    pub half_extent: i32,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            half_extent: MAP_HALF_EXTENT,
        }
    }
}

impl SearchLimits {
    /// Default limits with a different expansion budget.
    #[must_use]
    pub fn with_max_iterations(max_iterations: usize) -> Self {
        Self {
            max_iterations,
            ..Self::default()
        }
    }
}

/// Why a search produced no path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PathError {
    /// The expansion budget ran out before the goal was reached.
    #[error("search budget of {limit} expansions exhausted")]
    BudgetExhausted {
        /// Budget that was in force.
        limit: usize,
    },
    /// Every reachable cell was expanded without meeting the goal.
    #[error("no route from {start:?} to {goal:?}")]
    Unreachable {
        /// Cell the search started from.
        start: GridCell,
        /// Cell the search was looking for.
        goal: GridCell,
    },
}

/// Runs A* from the cell containing `start` to the cell containing `goal`.
///
/// # Errors
///
/// Returns [`PathError::BudgetExhausted`] when `limits.max_iterations`
/// expansions pass without reaching the goal and [`PathError::Unreachable`]
/// when the open set empties first or when either endpoint lies outside
/// `limits.half_extent`.
///
/// # Examples
/// ```
/// use glam::Vec3;
/// use stalker::pathfinding::{search, SearchLimits};
/// use stalker::ObstacleGrid;
///
/// let grid = ObstacleGrid::new();
/// let path = search(&grid, Vec3::ZERO, Vec3::new(5.0, 0.0, 0.0), SearchLimits::default())?;
/// assert_eq!(path.len(), 6);
/// assert!((path.cost() - 5.0).abs() < 1e-6);
/// # Ok::<(), stalker::pathfinding::PathError>(())
/// ```
pub fn search(
    grid: &ObstacleGrid,
    start: Vec3,
    goal: Vec3,
    limits: SearchLimits,
) -> Result<Path, PathError> {
    let start_cell = GridCell::from_world(start);
    let goal_cell = GridCell::from_world(goal);
    if !start_cell.within(limits.half_extent) || !goal_cell.within(limits.half_extent) {
        return Err(PathError::Unreachable {
            start: start_cell,
            goal: goal_cell,
        });
    }
    let mut tree = SearchTree::with_root(start_cell, start_cell.manhattan(goal_cell));

    let mut iterations = 0;
    while iterations < limits.max_iterations {
        let Some(current_index) = tree.pop() else {
            return Err(PathError::Unreachable {
                start: start_cell,
                goal: goal_cell,
            });
        };
        iterations += 1;

        let Some(current) = tree.node(current_index).copied() else {
            continue;
        };
        if current.cell == goal_cell {
            let cells = tree.trace(current_index).into_iter().map(|n| n.cell).collect();
            return Path::from_cells(cells, current.g).ok_or(PathError::Unreachable {
                start: start_cell,
                goal: goal_cell,
            });
        }

        for (neighbour, step_cost) in current.cell.neighbours() {
            if tree.is_closed(neighbour) || grid.is_blocked(neighbour) {
                continue;
            }
            if !neighbour.within(limits.half_extent) {
                continue;
            }
            tree.offer(
                neighbour,
                current.g + step_cost,
                neighbour.manhattan(goal_cell),
                Some(current_index),
            );
        }
    }

    Err(PathError::BudgetExhausted {
        limit: limits.max_iterations,
    })
}

/// Convenience wrapper that treats every failure as "no path".
///
/// Failures are logged at `debug` level; callers fall back to moving in a
/// straight line towards `goal`.
#[must_use]
pub fn find_path(
    grid: &ObstacleGrid,
    start: Vec3,
    goal: Vec3,
    max_iterations: usize,
) -> Option<Path> {
    match search(grid, start, goal, SearchLimits::with_max_iterations(max_iterations)) {
        Ok(path) => Some(path),
        Err(err) => {
            debug!("pathfinding from {start:?} to {goal:?} gave up: {err}");
            None
        }
    }
}
