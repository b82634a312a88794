pub mod command;
pub mod sink;

pub use command::{Color, CylinderCommand, DrawCommand, LeafCommand};
pub use sink::{CommandBuffer, DrawSink};

use crate::config::LeafTintConfig;
use crate::entropy::{rng_from_seed, Entropy};
use crate::math::{self, UP};
use crate::tree::Tree;
use bevy::math::Vec3;
use rand::rngs::StdRng;

/// Green channel range for leaf spheres.
pub const LEAF_GREEN: (f32, f32) = (0.6, 0.8);
/// Top radius of a segment cylinder relative to its thickness.
pub const TAPER: f32 = 0.8;
/// Leaf sphere radius relative to the thickness of its segment.
pub const LEAF_SCALE: f32 = 4.0;

/// Where leaf greens come from on a render pass.
pub enum LeafTint<'a> {
	/// Draw from the caller's source, so greens change every frame.
	Flicker(&'a mut dyn Entropy),
	/// Reseed on every pass, so every frame gets the same greens.
	Seeded(u64),
}

impl<'a> LeafTint<'a> {
	/// Resolves a configured policy, borrowing `entropy` for flicker.
	pub fn from_config(config: LeafTintConfig, entropy: &'a mut dyn Entropy) -> Self {
		match config {
			LeafTintConfig::Flicker => LeafTint::Flicker(entropy),
			LeafTintConfig::Seeded { seed } => LeafTint::Seeded(seed),
		}
	}
}

/// Emits one frame of `tree` into `sink`.
///
/// The frame opens with the tree-wide rotation from the animation state, then walks the
/// segments in pre-order: one cylinder per segment, followed by a leaf for terminal
/// segments.
pub fn render<S: DrawSink + ?Sized>(tree: &Tree, tint: LeafTint<'_>, sink: &mut S) {
	debug_assert!(!tree.is_empty(), "render needs a tree with a trunk");

	let mut seeded: StdRng;
	let greens: &mut dyn Entropy = match tint {
		LeafTint::Flicker(entropy) => entropy,
		LeafTint::Seeded(seed) => {
			seeded = rng_from_seed(Some(seed));
			&mut seeded
		}
	};

	sink.draw(DrawCommand::BeginFrame {
		rotation_degrees: tree.animation().rotation_angle(),
		axis: UP,
	});

	for (id, segment) in tree.iter() {
		let orientation = math::orientation(UP, segment.direction());
		let color = if segment.depth() == 0 { Color::DARK_BROWN } else { Color::LIGHT_BROWN };

		sink.draw(DrawCommand::Cylinder(CylinderCommand {
			segment: id,
			depth: segment.depth(),
			origin: segment.origin(),
			orientation,
			base_radius: segment.thickness(),
			top_radius: segment.thickness() * TAPER,
			length: segment.length(),
			color,
		}));

		if segment.is_terminal() {
			let (lo, hi) = LEAF_GREEN;
			sink.draw(DrawCommand::Leaf(LeafCommand {
				segment: id,
				origin: segment.origin(),
				orientation,
				offset: Vec3::new(0.0, segment.length(), 0.0),
				radius: segment.thickness() * LEAF_SCALE,
				color: Color::green(greens.real_in(lo, hi)),
			}));
		}
	}

	sink.draw(DrawCommand::EndFrame);
	log::trace!("Rendered {} segments at {} degrees", tree.len(), tree.animation().rotation_angle());
}
