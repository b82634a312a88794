pub mod builder;
pub mod segment;

pub use builder::{generate, TreeBuilder};
pub use segment::{Segment, SegmentId};

use crate::animation::AnimationState;

/// A generated tree: an arena of segments in generation order plus the animation phase.
///
/// The trunk is always [`SegmentId::TRUNK`]. Arena order is pre-order, so every parent
/// precedes its descendants and siblings keep the order they were grown in. Topology never
/// changes after generation; only the animation state does.
#[derive(Debug, Clone)]
pub struct Tree {
	segments: Vec<Segment>,
	max_level: u32,
	animation: AnimationState,
}

impl Tree {
	pub(crate) fn new(trunk: Segment, max_level: u32) -> Self {
		Self { segments: vec![trunk], max_level, animation: AnimationState::new() }
	}

	pub(crate) fn push_child(&mut self, parent: SegmentId, child: Segment) -> SegmentId {
		let id = SegmentId(self.segments.len());
		self.segments.push(child);
		self.segments[parent.0].push_child(id);
		id
	}

	pub fn trunk(&self) -> &Segment {
		&self.segments[SegmentId::TRUNK.0]
	}

	pub fn segment(&self, id: SegmentId) -> Option<&Segment> {
		self.segments.get(id.0)
	}

	/// All segments in pre-order.
	pub fn segments(&self) -> &[Segment] {
		&self.segments
	}

	/// Segments paired with their ids, in pre-order.
	pub fn iter(&self) -> impl Iterator<Item = (SegmentId, &Segment)> {
		self.segments.iter().enumerate().map(|(index, segment)| (SegmentId(index), segment))
	}

	pub fn children(&self, id: SegmentId) -> impl Iterator<Item = &Segment> {
		self.segment(id)
			.map(|segment| segment.children())
			.unwrap_or_default()
			.iter()
			.map(|child| &self.segments[child.0])
	}

	pub fn parent(&self, id: SegmentId) -> Option<&Segment> {
		self.segment(id).and_then(|segment| segment.parent()).map(|parent| &self.segments[parent.0])
	}

	pub fn terminals(&self) -> impl Iterator<Item = &Segment> {
		self.segments.iter().filter(|segment| segment.is_terminal())
	}

	pub fn len(&self) -> usize {
		self.segments.len()
	}

	/// Never true for a generated tree; the trunk always exists.
	pub fn is_empty(&self) -> bool {
		self.segments.is_empty()
	}

	/// The depth limit the tree was grown with.
	pub fn max_level(&self) -> u32 {
		self.max_level
	}

	/// Deepest depth actually present.
	pub fn max_depth(&self) -> u32 {
		self.segments.iter().map(Segment::depth).max().unwrap_or_default()
	}

	/// Walks the child links with an explicit stack. Yields the same order as [`Tree::iter`].
	pub fn depth_first(&self) -> impl Iterator<Item = SegmentId> + '_ {
		let mut stack = vec![SegmentId::TRUNK];
		std::iter::from_fn(move || {
			let id = stack.pop()?;
			stack.extend(self.segments[id.0].children().iter().rev().copied());
			Some(id)
		})
	}

	pub fn animation(&self) -> &AnimationState {
		&self.animation
	}

	/// Advances the animation by one frame.
	pub fn tick(&mut self) {
		self.animation.tick();
	}
}
