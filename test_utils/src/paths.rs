//! Structural checks on pathfinder output.

use stalker::{GridCell, ObstacleGrid, Path};

/// Assert that `path` runs from `start` to `goal`, never enters a blocked
/// cell and only moves between 8-connected neighbours.
///
/// # Panics
/// Panics with the offending cell when any check fails.
pub fn assert_path_valid(path: &Path, grid: &ObstacleGrid, start: GridCell, goal: GridCell) {
    let cells = path.cells();
    assert_eq!(cells.first(), Some(&start), "path does not begin at start");
    assert_eq!(cells.last(), Some(&goal), "path does not end at goal");
    for cell in cells {
        assert!(!grid.is_blocked(*cell), "path enters blocked cell {cell:?}");
    }
    for pair in cells.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let step = ((a.x - b.x).abs(), (a.z - b.z).abs());
        assert!(
            step.0 <= 1 && step.1 <= 1 && step != (0, 0),
            "non-adjacent step {a:?} -> {b:?}"
        );
    }
}
