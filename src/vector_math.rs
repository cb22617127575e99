//! Basic vector math helper functions.
//! Small helpers for planar distances, headings and normalised directions.
use glam::Vec3;

/// Returns the unit vector pointing from `from` to `to`.
///
/// Non-finite input and coincident points both yield [`Vec3::ZERO`], so a
/// caller multiplying by a speed never produces `NaN` movement.
///
/// # Examples
///
/// ```
/// use glam::Vec3;
/// use stalker::vector_math::direction_to;
/// let dir = direction_to(Vec3::ZERO, Vec3::new(3.0, 0.0, 4.0));
/// assert!((dir.x - 0.6).abs() < 1e-6);
/// assert!((dir.z - 0.8).abs() < 1e-6);
///
/// assert_eq!(direction_to(Vec3::ONE, Vec3::ONE), Vec3::ZERO);
/// ```
#[must_use]
pub fn direction_to(from: Vec3, to: Vec3) -> Vec3 {
    let offset = to - from;
    if !offset.is_finite() {
        return Vec3::ZERO;
    }
    offset.try_normalize().unwrap_or(Vec3::ZERO)
}

/// Yaw (rotation about +Y) that turns a model to look along `offset`.
///
/// Returns `None` when the offset has no horizontal component.
#[must_use]
pub fn yaw_towards(offset: Vec3) -> Option<f32> {
    let planar = Vec3::new(offset.x, 0.0, offset.z);
    if planar.length_squared() <= f32::EPSILON || !planar.is_finite() {
        return None;
    }
    Some(offset.x.atan2(offset.z))
}

/// Point on the XZ circle of `radius` around `centre` at `angle` radians.
///
/// The Y coordinate is taken from `height`.
#[must_use]
pub fn orbit_point(centre: Vec3, radius: f32, angle: f32, height: f32) -> Vec3 {
    Vec3::new(
        centre.x + angle.cos() * radius,
        height,
        centre.z + angle.sin() * radius,
    )
}
