//! Pathfinder behaviour on open grids, walls with a gap and sealed goals.

use std::f32::consts::SQRT_2;

use approx::assert_relative_eq;
use glam::Vec3;
use rstest::rstest;
use stalker::{
    find_path, search, GridCell, ObstacleGrid, PathError, SearchLimits, DEFAULT_MAX_ITERATIONS,
};
use test_utils::{assert_path_valid, enclosure, wall_with_gap};

fn at(x: f32, z: f32) -> Vec3 {
    Vec3::new(x, 0.0, z)
}

#[rstest]
#[case::east(5, 0, 5.0)]
#[case::north_west(-4, 4, 4.0 * SQRT_2)]
#[case::knight(2, -7, 2.0 * SQRT_2 + 5.0)]
fn open_grid_path_is_octile_optimal(#[case] x: i32, #[case] z: i32, #[case] cost: f32) {
    let grid = ObstacleGrid::new();
    let goal = GridCell::new(x, z);
    let path = find_path(&grid, Vec3::ZERO, goal.centre(), DEFAULT_MAX_ITERATIONS)
        .unwrap_or_else(|| panic!("no path to {goal:?}"));
    assert_path_valid(&path, &grid, GridCell::new(0, 0), goal);
    assert_relative_eq!(path.cost(), cost, epsilon = 1e-4);
}

#[test]
fn five_cells_east_yields_six_waypoints() {
    let grid = ObstacleGrid::new();
    let path = find_path(&grid, at(0.0, 0.0), at(5.0, 0.0), 100).expect("path expected");
    assert_eq!(path.len(), 6);
    assert_relative_eq!(path.cost(), 5.0);
    let expected: Vec<Vec3> = (0_u8..=5).map(|x| Vec3::new(f32::from(x), 0.5, 0.0)).collect();
    assert_eq!(path.waypoints(), expected.as_slice());
}

#[rstest]
#[case::gap_above(2, 2.0 * (2.0 * SQRT_2 + 1.0))]
#[case::gap_below(-4, 2.0 * (3.0 * SQRT_2 + 1.0))]
fn wall_is_crossed_through_its_gap(#[case] gap_z: i32, #[case] cost: f32) {
    let grid = wall_with_gap(3, 5, gap_z);
    let path = find_path(&grid, at(0.0, 0.0), at(6.0, 0.0), DEFAULT_MAX_ITERATIONS)
        .expect("the gap should be found");
    assert_path_valid(&path, &grid, GridCell::new(0, 0), GridCell::new(6, 0));
    assert!(path.cells().contains(&GridCell::new(3, gap_z)));
    assert_relative_eq!(path.cost(), cost, epsilon = 1e-4);
}

#[test]
fn sealed_goal_fails_within_budget() {
    let grid = enclosure(5, 0);
    assert!(find_path(&grid, at(0.0, 0.0), at(5.0, 0.0), DEFAULT_MAX_ITERATIONS).is_none());
    assert_eq!(
        search(&grid, at(0.0, 0.0), at(5.0, 0.0), SearchLimits::default()),
        Err(PathError::BudgetExhausted { limit: 100 })
    );
}

#[test]
fn sealed_start_reports_unreachable() {
    let grid = enclosure(0, 0);
    assert_eq!(
        search(&grid, at(0.0, 0.0), at(5.0, 0.0), SearchLimits::default()),
        Err(PathError::Unreachable {
            start: GridCell::new(0, 0),
            goal: GridCell::new(5, 0),
        })
    );
}

#[test]
fn removing_a_wall_cell_opens_a_shorter_route() {
    let mut grid = wall_with_gap(3, 5, 2);
    let detour = find_path(&grid, at(0.0, 0.0), at(6.0, 0.0), 100).expect("detour expected");
    assert!(grid.remove(at(3.0, 0.0)));
    let direct = find_path(&grid, at(0.0, 0.0), at(6.0, 0.0), 100).expect("direct expected");
    assert!(direct.cost() < detour.cost());
    assert_relative_eq!(direct.cost(), 6.0);
}

#[test]
fn footprint_blocks_every_covered_cell() {
    let mut grid = ObstacleGrid::new();
    let added = grid.add_footprint(Vec3::new(3.0, 1.0, 0.0), Vec3::new(0.5, 1.0, 3.5));
    assert!(added > 0);
    let path = find_path(&grid, at(0.0, 0.0), at(6.0, 0.0), DEFAULT_MAX_ITERATIONS)
        .expect("route around the pillar");
    assert_path_valid(&path, &grid, GridCell::new(0, 0), GridCell::new(6, 0));
}
