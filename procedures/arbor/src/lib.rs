pub mod animation;
pub mod config;
pub mod entropy;
pub mod error;
pub mod math;
pub mod render;
pub mod tree;

pub use animation::AnimationState;
pub use config::{GrowthProfile, LeafTintConfig, TreeConfig};
pub use entropy::{rng_from_seed, Entropy};
pub use error::{ConfigError, DomainError};
pub use math::Orientation;
pub use render::{render, CommandBuffer, DrawCommand, DrawSink, LeafTint};
pub use tree::{generate, Segment, SegmentId, Tree, TreeBuilder};
