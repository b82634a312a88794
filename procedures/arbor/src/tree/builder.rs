use super::{Segment, SegmentId, Tree};
use crate::config::TreeConfig;
use crate::entropy::Entropy;
use crate::error::DomainError;
use crate::math;
use bevy::math::Vec3;
use std::f32::consts::TAU;

/// Grows a [`Tree`] from a [`TreeConfig`].
///
/// Children attach at the tip of their parent and are grown depth first: each child's
/// subtree is completed before its next sibling is drawn. Growth stops only at
/// `max_level`; there is no length or thickness cutoff.
#[derive(Debug, Clone, Default)]
pub struct TreeBuilder {
	config: TreeConfig,
}

impl TreeBuilder {
	pub fn new(config: TreeConfig) -> Self {
		Self { config }
	}

	pub fn config(&self) -> &TreeConfig {
		&self.config
	}

	/// Validates the config, then grows the whole tree. Nothing is built on error.
	pub fn build<E: Entropy>(&self, rng: &mut E) -> Result<Tree, DomainError> {
		let direction = self.config.validate()?;

		let trunk = Segment::from_unit(
			self.config.origin,
			direction,
			self.config.trunk_length,
			self.config.trunk_thickness,
			0,
			None,
		);
		let mut tree = Tree::new(trunk, self.config.max_level);
		self.grow(&mut tree, SegmentId::TRUNK, rng);

		log::debug!(
			"Generated tree with {} segments, {} terminal, max level {}",
			tree.len(),
			tree.terminals().count(),
			self.config.max_level
		);

		Ok(tree)
	}

	fn grow<E: Entropy>(&self, tree: &mut Tree, parent_id: SegmentId, rng: &mut E) {
		let parent = &tree.segments[parent_id.0];
		if parent.depth() >= self.config.max_level {
			return;
		}

		let depth = parent.depth();
		let direction = parent.direction();
		let tip = parent.tip();
		let growth = &self.config.growth;
		let length = parent.length() * growth.length_factor(depth);
		let thickness = parent.thickness() * growth.thickness_factor;

		let (lo, hi) = growth.branching(depth);
		let count = rng.int_in(lo, hi);

		for _ in 0..count {
			let azimuth = rng.real_in(0.0, TAU);
			let (lo, hi) = growth.spread_degrees(depth);
			let spread = rng.real_in(lo, hi).to_radians();

			let child = Segment::from_unit(
				tip,
				math::rotate(direction, azimuth, spread),
				length,
				thickness,
				depth + 1,
				Some(parent_id),
			);
			let child_id = tree.push_child(parent_id, child);
			self.grow(tree, child_id, rng);
		}
	}
}

/// Grows a tree with the default growth profile.
pub fn generate<E: Entropy>(
	origin: Vec3,
	trunk_direction: Vec3,
	trunk_length: f32,
	trunk_thickness: f32,
	max_level: u32,
	rng: &mut E,
) -> Result<Tree, DomainError> {
	let config = TreeConfig::default()
		.with_origin(origin)
		.with_direction(trunk_direction)
		.with_trunk_length(trunk_length)
		.with_trunk_thickness(trunk_thickness)
		.with_max_level(max_level);
	TreeBuilder::new(config).build(rng)
}
