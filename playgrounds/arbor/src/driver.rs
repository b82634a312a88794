use arbor::{
	render, rng_from_seed, CommandBuffer, DomainError, DrawCommand, LeafTint, LeafTintConfig, Tree,
	TreeBuilder, TreeConfig,
};
use rand::rngs::StdRng;
use serde::Serialize;

/// Per-frame counts reported by the playground.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrameStats {
	pub frame: usize,
	pub rotation_degrees: f32,
	pub cylinders: usize,
	pub leaves: usize,
}

/// Stands in for a render loop: ticks the tree, then renders it into a command buffer.
pub struct FrameDriver {
	tree: Tree,
	greens: StdRng,
	leaf_tint: LeafTintConfig,
	buffer: CommandBuffer,
	frame: usize,
}

impl FrameDriver {
	pub fn new(config: &TreeConfig) -> Result<Self, DomainError> {
		let mut rng = rng_from_seed(config.seed);
		let tree = TreeBuilder::new(config.clone()).build(&mut rng)?;

		log::info!(
			"Grew tree with {} segments and {} leaves (max level {})",
			tree.len(),
			tree.terminals().count(),
			tree.max_level()
		);

		// leaf greens continue the generation stream so a seeded run is fully reproducible
		Ok(Self {
			tree,
			greens: rng,
			leaf_tint: config.leaf_tint,
			buffer: CommandBuffer::new(),
			frame: 0,
		})
	}

	pub fn tree(&self) -> &Tree {
		&self.tree
	}

	/// Advances one frame and returns the commands it produced.
	pub fn next_frame(&mut self) -> &CommandBuffer {
		self.tree.tick();
		self.buffer.clear();
		render(&self.tree, LeafTint::from_config(self.leaf_tint, &mut self.greens), &mut self.buffer);
		self.frame += 1;
		&self.buffer
	}

	/// Commands of the most recent frame.
	pub fn commands(&self) -> &[DrawCommand] {
		self.buffer.commands()
	}

	pub fn stats(&self) -> FrameStats {
		FrameStats {
			frame: self.frame,
			rotation_degrees: self.tree.animation().rotation_angle(),
			cylinders: self.buffer.cylinders().count(),
			leaves: self.buffer.leaves().count(),
		}
	}
}
