use super::command::{CylinderCommand, DrawCommand, LeafCommand};

/// Receives draw commands in emission order. Rasterization is entirely up to the sink.
pub trait DrawSink {
	fn draw(&mut self, command: DrawCommand);
}

impl DrawSink for Vec<DrawCommand> {
	fn draw(&mut self, command: DrawCommand) {
		self.push(command);
	}
}

/// Records commands so a frame can be inspected or replayed.
#[derive(Debug, Clone, Default)]
pub struct CommandBuffer {
	commands: Vec<DrawCommand>,
}

impl CommandBuffer {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn commands(&self) -> &[DrawCommand] {
		&self.commands
	}

	pub fn cylinders(&self) -> impl Iterator<Item = &CylinderCommand> {
		self.commands.iter().filter_map(|command| match command {
			DrawCommand::Cylinder(cylinder) => Some(cylinder),
			_ => None,
		})
	}

	pub fn leaves(&self) -> impl Iterator<Item = &LeafCommand> {
		self.commands.iter().filter_map(|command| match command {
			DrawCommand::Leaf(leaf) => Some(leaf),
			_ => None,
		})
	}

	pub fn len(&self) -> usize {
		self.commands.len()
	}

	pub fn is_empty(&self) -> bool {
		self.commands.is_empty()
	}

	pub fn clear(&mut self) {
		self.commands.clear();
	}
}

impl DrawSink for CommandBuffer {
	fn draw(&mut self, command: DrawCommand) {
		self.commands.push(command);
	}
}
