use crate::math::UP;
use bevy::math::Quat;

/// Degrees added to the rotation angle on every tick.
pub const ROTATION_STEP: f32 = 0.5;

const FULL_TURN: f32 = 360.0;

/// Whole-tree spin about the up axis, advanced once per frame.
///
/// The angle is kept in `[0, 360)`. Every multiple of [`ROTATION_STEP`] in that range is
/// exact in `f32`, so `n` ticks from zero land exactly on `(0.5 * n) mod 360`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimationState {
	rotation_angle: f32,
}

impl AnimationState {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_rotation_angle(mut self, degrees: f32) -> Self {
		self.rotation_angle = degrees.rem_euclid(FULL_TURN);
		self
	}

	/// Current phase in degrees.
	pub fn rotation_angle(&self) -> f32 {
		self.rotation_angle
	}

	pub fn tick(&mut self) {
		self.rotation_angle = (self.rotation_angle + ROTATION_STEP).rem_euclid(FULL_TURN);
		log::trace!("Rotation angle advanced to {}", self.rotation_angle);
	}

	pub fn frame_rotation(&self) -> Quat {
		Quat::from_axis_angle(UP, self.rotation_angle.to_radians())
	}
}
