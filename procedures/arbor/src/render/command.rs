use crate::math::Orientation;
use crate::tree::SegmentId;
use bevy::math::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Linear RGB in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
	pub r: f32,
	pub g: f32,
	pub b: f32,
}

impl Color {
	pub const DARK_BROWN: Color = Color::rgb(0.4, 0.2, 0.0);
	pub const LIGHT_BROWN: Color = Color::rgb(0.6, 0.4, 0.1);

	pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
		Self { r, g, b }
	}

	pub const fn green(g: f32) -> Self {
		Self::rgb(0.0, g, 0.0)
	}
}

fn orientation_quat(orientation: Option<Orientation>) -> Quat {
	orientation.map(|orientation| orientation.to_quat()).unwrap_or(Quat::IDENTITY)
}

/// A tapered cylinder along local +Y, placed at `origin` and turned by `orientation`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CylinderCommand {
	pub segment: SegmentId,
	pub depth: u32,
	pub origin: Vec3,
	/// `None` when the segment already points up.
	pub orientation: Option<Orientation>,
	pub base_radius: f32,
	pub top_radius: f32,
	pub length: f32,
	pub color: Color,
}

impl CylinderCommand {
	pub fn local_transform(&self) -> Mat4 {
		Mat4::from_rotation_translation(orientation_quat(self.orientation), self.origin)
	}

	/// `frame_rotation` is applied before the segment's own transform.
	pub fn world_transform(&self, frame_rotation: Quat) -> Mat4 {
		Mat4::from_quat(frame_rotation) * self.local_transform()
	}
}

/// A leaf sphere at `offset` in the local frame of its terminal segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LeafCommand {
	pub segment: SegmentId,
	pub origin: Vec3,
	pub orientation: Option<Orientation>,
	pub offset: Vec3,
	pub radius: f32,
	pub color: Color,
}

impl LeafCommand {
	pub fn local_transform(&self) -> Mat4 {
		Mat4::from_rotation_translation(orientation_quat(self.orientation), self.origin)
			* Mat4::from_translation(self.offset)
	}

	pub fn world_transform(&self, frame_rotation: Quat) -> Mat4 {
		Mat4::from_quat(frame_rotation) * self.local_transform()
	}

	/// Sphere center in world space.
	pub fn center(&self, frame_rotation: Quat) -> Vec3 {
		self.world_transform(frame_rotation).transform_point3(Vec3::ZERO)
	}
}

/// Everything a sink has to draw for one frame, in order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
	/// Whole-tree rotation that every following command composes after.
	BeginFrame { rotation_degrees: f32, axis: Vec3 },
	Cylinder(CylinderCommand),
	Leaf(LeafCommand),
	EndFrame,
}

impl DrawCommand {
	pub fn frame_rotation(&self) -> Option<Quat> {
		match self {
			DrawCommand::BeginFrame { rotation_degrees, axis } => {
				Some(Quat::from_axis_angle(*axis, rotation_degrees.to_radians()))
			}
			_ => None,
		}
	}
}
