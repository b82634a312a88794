use crate::error::DomainError;
use bevy::math::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Canonical up axis. Segment geometry is authored along +Y in local space.
pub const UP: Vec3 = Vec3::Y;

/// Cross products shorter than this are treated as parallel inputs.
pub const AXIS_EPSILON: f32 = 1e-6;

/// Normalizes `v`, rejecting the zero vector and non-finite input.
pub fn normalize(v: Vec3) -> Result<Vec3, DomainError> {
	v.try_normalize().ok_or(DomainError::ZeroVector)
}

/// Two unit vectors spanning the plane perpendicular to the unit vector `dir`.
///
/// The reference axis is switched away from `dir` when they are close to parallel,
/// so axis-aligned inputs are fine.
pub fn perpendicular_basis(dir: Vec3) -> [Vec3; 2] {
	let reference = if dir.y.abs() < 0.99 { Vec3::Y } else { Vec3::X };
	let tangent = dir.cross(reference).normalize();
	let bitangent = dir.cross(tangent);
	[tangent, bitangent]
}

/// Tilts the unit vector `direction` by `polar_spread` radians toward the perpendicular
/// picked by `azimuth` (radians around `direction`).
///
/// The result is unit length and sits exactly `polar_spread` away from `direction`.
pub fn rotate(direction: Vec3, azimuth: f32, polar_spread: f32) -> Vec3 {
	debug_assert!(direction.is_normalized(), "rotate expects a unit direction");

	let [tangent, bitangent] = perpendicular_basis(direction);
	let (sin_az, cos_az) = azimuth.sin_cos();
	let perpendicular = tangent * cos_az + bitangent * sin_az;

	let (sin_spread, cos_spread) = polar_spread.sin_cos();
	(direction * cos_spread + perpendicular * sin_spread).normalize()
}

/// Angle between `a` and `b` in degrees.
pub fn angle_between(a: Vec3, b: Vec3) -> f32 {
	// rounding can push the dot product of unit vectors just past 1
	let dot = a.normalize_or_zero().dot(b.normalize_or_zero()).clamp(-1.0, 1.0);
	dot.acos().to_degrees()
}

pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
	a.cross(b)
}

/// True when `axis` is too short to rotate about.
pub fn is_degenerate_axis(axis: Vec3) -> bool {
	axis.length_squared() < AXIS_EPSILON * AXIS_EPSILON
}

/// Axis-angle rotation taking the canonical up axis onto a segment direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Orientation {
	/// Unit rotation axis.
	pub axis: Vec3,
	pub angle_degrees: f32,
}

impl Orientation {
	pub fn to_quat(&self) -> Quat {
		Quat::from_axis_angle(self.axis, self.angle_degrees.to_radians())
	}
}

/// Rotation carrying `up` onto `direction`, or `None` if they already coincide.
///
/// Anti-parallel inputs have no cross product to rotate about; they get a half turn
/// about an axis perpendicular to `up` so a downward segment still points down.
pub fn orientation(up: Vec3, direction: Vec3) -> Option<Orientation> {
	let axis = cross(up, direction);
	if !is_degenerate_axis(axis) {
		let angle_degrees = angle_between(up, direction);
		return Some(Orientation { axis: axis.normalize(), angle_degrees });
	}

	if up.dot(direction) < 0.0 {
		let [half_turn_axis, _] = perpendicular_basis(up.normalize());
		return Some(Orientation { axis: half_turn_axis, angle_degrees: 180.0 });
	}

	None
}
