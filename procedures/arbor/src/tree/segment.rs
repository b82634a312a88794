use crate::error::DomainError;
use crate::math;
use bevy::math::Vec3;
use serde::{Deserialize, Serialize};

/// Index of a segment in its tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SegmentId(pub usize);

impl SegmentId {
	pub const TRUNK: SegmentId = SegmentId(0);
}

/// One rigid piece of the tree: a tapered cylinder from `origin` along `direction`.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
	origin: Vec3,
	direction: Vec3,
	length: f32,
	thickness: f32,
	depth: u32,
	parent: Option<SegmentId>,
	children: Vec<SegmentId>,
}

impl Segment {
	/// Builds a detached segment, normalizing `direction`.
	pub fn new(
		origin: Vec3,
		direction: Vec3,
		length: f32,
		thickness: f32,
		depth: u32,
	) -> Result<Self, DomainError> {
		let direction = math::normalize(direction)?;
		Ok(Self::from_unit(origin, direction, length, thickness, depth, None))
	}

	pub(crate) fn from_unit(
		origin: Vec3,
		direction: Vec3,
		length: f32,
		thickness: f32,
		depth: u32,
		parent: Option<SegmentId>,
	) -> Self {
		debug_assert!(direction.is_normalized());
		Self { origin, direction, length, thickness, depth, parent, children: Vec::new() }
	}

	pub fn origin(&self) -> Vec3 {
		self.origin
	}

	/// Unit direction.
	pub fn direction(&self) -> Vec3 {
		self.direction
	}

	pub fn length(&self) -> f32 {
		self.length
	}

	pub fn thickness(&self) -> f32 {
		self.thickness
	}

	pub fn depth(&self) -> u32 {
		self.depth
	}

	pub fn parent(&self) -> Option<SegmentId> {
		self.parent
	}

	pub fn children(&self) -> &[SegmentId] {
		&self.children
	}

	/// Where children attach.
	pub fn tip(&self) -> Vec3 {
		self.origin + self.direction * self.length
	}

	/// Terminal segments carry the leaves.
	pub fn is_terminal(&self) -> bool {
		self.children.is_empty()
	}

	pub(crate) fn push_child(&mut self, child: SegmentId) {
		self.children.push(child);
	}
}
