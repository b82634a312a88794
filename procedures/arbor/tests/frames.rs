use arbor::{
	generate, render, rng_from_seed, CommandBuffer, DrawCommand, Entropy, LeafTint, TreeBuilder,
	TreeConfig,
};
use bevy::math::Vec3;

/// Always grows three children; reals come from a seeded source.
struct ThreeChildren(rand::rngs::StdRng);

impl Entropy for ThreeChildren {
	fn int_in(&mut self, _lo: u32, _hi: u32) -> u32 {
		3
	}

	fn real_in(&mut self, lo: f32, hi: f32) -> f32 {
		self.0.real_in(lo, hi)
	}
}

#[test]
fn test_trunk_only_tree_emits_one_cylinder_and_one_leaf() {
	let mut rng = rng_from_seed(Some(0));
	let tree = generate(Vec3::ZERO, Vec3::Y, 2.0, 0.15, 0, &mut rng).unwrap();
	assert_eq!(tree.len(), 1);

	let mut buffer = CommandBuffer::new();
	render(&tree, LeafTint::Flicker(&mut rng), &mut buffer);
	assert_eq!(buffer.cylinders().count(), 1);
	assert_eq!(buffer.leaves().count(), 1);
}

#[test]
fn test_three_children_single_level() {
	let mut rng = ThreeChildren(rng_from_seed(Some(0)));
	let tree = generate(Vec3::ZERO, Vec3::Y, 2.0, 0.15, 1, &mut rng).unwrap();
	assert_eq!(tree.len(), 4);

	let mut buffer = CommandBuffer::new();
	render(&tree, LeafTint::Seeded(1), &mut buffer);
	assert_eq!(buffer.leaves().count(), 3);
	assert!(buffer.leaves().all(|leaf| leaf.segment.0 != 0));
}

#[test]
fn test_frame_driver_loop() {
	let config = TreeConfig::default().with_seed(77);
	let mut rng = rng_from_seed(config.seed);
	let mut tree = TreeBuilder::new(config).build(&mut rng).unwrap();

	let mut buffer = CommandBuffer::new();
	let mut angles = Vec::new();
	for _ in 0..4 {
		tree.tick();
		buffer.clear();
		render(&tree, LeafTint::Flicker(&mut rng), &mut buffer);

		match buffer.commands().first() {
			Some(DrawCommand::BeginFrame { rotation_degrees, axis }) => {
				assert_eq!(*axis, Vec3::Y);
				angles.push(*rotation_degrees);
			}
			other => panic!("frame must open with a rotation, got {:?}", other),
		}
		assert_eq!(buffer.commands().last(), Some(&DrawCommand::EndFrame));
		assert_eq!(buffer.cylinders().count(), tree.len());
	}

	assert_eq!(angles, vec![0.5, 1.0, 1.5, 2.0]);
}

#[test]
fn test_same_seed_same_tree() {
	let config = TreeConfig::default().with_seed(1234).with_max_level(4);

	let a = TreeBuilder::new(config.clone()).build(&mut rng_from_seed(config.seed)).unwrap();
	let b = TreeBuilder::new(config.clone()).build(&mut rng_from_seed(config.seed)).unwrap();
	assert_eq!(a.segments(), b.segments());

	let mut first = CommandBuffer::new();
	let mut second = CommandBuffer::new();
	render(&a, LeafTint::Seeded(5), &mut first);
	render(&b, LeafTint::Seeded(5), &mut second);
	assert_eq!(first.commands(), second.commands());
}

#[test]
fn test_commands_serialize_to_json() {
	let mut rng = rng_from_seed(Some(3));
	let tree = generate(Vec3::ZERO, Vec3::Y, 2.0, 0.15, 1, &mut rng).unwrap();
	let mut commands = Vec::new();
	render(&tree, LeafTint::Seeded(1), &mut commands);

	let json = serde_json::to_string(&commands).unwrap();
	assert!(json.contains("\"kind\":\"begin_frame\""));
	assert!(json.contains("\"kind\":\"cylinder\""));
	assert!(json.contains("\"kind\":\"leaf\""));

	let parsed: Vec<DrawCommand> = serde_json::from_str(&json).unwrap();
	assert_eq!(parsed, commands);
}
