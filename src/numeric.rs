//! Numeric conversion helpers used across the project.
//!
//! These utilities guard conversions between floating-point and integer
//! domains. World coordinates are rounded onto the obstacle grid here so every
//! caller derives cells the same way.

use ordered_float::OrderedFloat;

/// Round an `OrderedFloat<f32>` and clamp it into the `i32` domain.
///
/// Non-finite input maps to `0`.
#[expect(
    clippy::cast_possible_truncation,
    reason = "The value is clamped to the i32 bounds before casting."
)]
#[must_use]
pub fn round_to_i32(value: OrderedFloat<f32>) -> i32 {
    let raw = value.into_inner();
    if !raw.is_finite() {
        return 0;
    }
    // Halves round towards positive infinity on both sides of zero.
    let rounded = (f64::from(raw) + 0.5).floor();
    let clamped = rounded.clamp(f64::from(i32::MIN), f64::from(i32::MAX));
    clamped as i32
}

/// Map a world coordinate onto its grid index for the given cell size.
///
/// # Examples
/// ```
/// use stalker::numeric::grid_index;
/// assert_eq!(grid_index(2.4, 1.0), 2);
/// assert_eq!(grid_index(-0.6, 1.0), -1);
/// assert_eq!(grid_index(3.0, 2.0), 2);
/// ```
#[must_use]
pub fn grid_index(world: f32, cell_size: f32) -> i32 {
    debug_assert!(cell_size > 0.0, "cell size must be positive");
    round_to_i32(OrderedFloat(world / cell_size))
}

/// Convert a grid index back to the world coordinate of the cell centre.
#[expect(
    clippy::cast_precision_loss,
    reason = "Grid indices are bounded by the map extent, far below 2^24."
)]
#[must_use]
pub fn grid_to_world(index: i32, cell_size: f32) -> f32 {
    index as f32 * cell_size
}

/// Convert a frame delta in seconds into milliseconds.
#[must_use]
pub fn secs_to_millis(seconds: f32) -> f32 {
    seconds * 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::positive(2.4, 2)]
    #[case::half_rounds_up(2.5, 3)]
    #[case::negative_half_rounds_up(-2.5, -2)]
    #[case::negative(-2.6, -3)]
    #[case::nan(f32::NAN, 0)]
    #[case::huge(1e20, i32::MAX)]
    fn rounds_like_the_grid_expects(#[case] value: f32, #[case] expected: i32) {
        assert_eq!(round_to_i32(OrderedFloat(value)), expected);
    }

    #[test]
    fn grid_round_trip_lands_on_centre() {
        let index = grid_index(7.3, 1.0);
        assert!((grid_to_world(index, 1.0) - 7.0).abs() < f32::EPSILON);
    }
}
