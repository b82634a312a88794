use crate::error::{ConfigError, DomainError};
use crate::math;
use bevy::math::Vec3;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Level-dependent growth parameters.
///
/// Parents shallower than `crown_depth` use the `inner_*` values, deeper parents use
/// the `outer_*` values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowthProfile {
	pub crown_depth: u32,
	/// Inclusive child count range near the trunk.
	pub inner_branching: (u32, u32),
	/// Inclusive child count range in the crown.
	pub outer_branching: (u32, u32),
	pub inner_spread_degrees: (f32, f32),
	pub outer_spread_degrees: (f32, f32),
	pub inner_length_factor: f32,
	pub outer_length_factor: f32,
	pub thickness_factor: f32,
}

impl Default for GrowthProfile {
	fn default() -> Self {
		Self {
			crown_depth: 2,
			inner_branching: (3, 5),
			outer_branching: (2, 3),
			inner_spread_degrees: (20.0, 40.0),
			outer_spread_degrees: (30.0, 60.0),
			inner_length_factor: 0.8,
			outer_length_factor: 0.6,
			thickness_factor: 0.7,
		}
	}
}

impl GrowthProfile {
	fn is_inner(&self, parent_depth: u32) -> bool {
		parent_depth < self.crown_depth
	}

	pub fn branching(&self, parent_depth: u32) -> (u32, u32) {
		if self.is_inner(parent_depth) {
			self.inner_branching
		} else {
			self.outer_branching
		}
	}

	pub fn spread_degrees(&self, parent_depth: u32) -> (f32, f32) {
		if self.is_inner(parent_depth) {
			self.inner_spread_degrees
		} else {
			self.outer_spread_degrees
		}
	}

	pub fn length_factor(&self, parent_depth: u32) -> f32 {
		if self.is_inner(parent_depth) {
			self.inner_length_factor
		} else {
			self.outer_length_factor
		}
	}

	pub fn validate(&self) -> Result<(), DomainError> {
		for (what, (lo, hi)) in
			[("inner branching", self.inner_branching), ("outer branching", self.outer_branching)]
		{
			// a zero child count would end a branch before max level
			if lo == 0 || lo > hi {
				return Err(DomainError::EmptyRange { what, lo: lo as f32, hi: hi as f32 });
			}
		}

		let (lo, hi) = self.inner_spread_degrees;
		DomainError::ensure_range("inner spread", lo, hi)?;
		let (lo, hi) = self.outer_spread_degrees;
		DomainError::ensure_range("outer spread", lo, hi)?;

		DomainError::ensure_positive("inner length factor", self.inner_length_factor)?;
		DomainError::ensure_positive("outer length factor", self.outer_length_factor)?;
		DomainError::ensure_positive("thickness factor", self.thickness_factor)?;
		Ok(())
	}

	pub fn with_crown_depth(mut self, crown_depth: u32) -> Self {
		self.crown_depth = crown_depth;
		self
	}

	pub fn with_inner_branching(mut self, lo: u32, hi: u32) -> Self {
		self.inner_branching = (lo, hi);
		self
	}

	pub fn with_outer_branching(mut self, lo: u32, hi: u32) -> Self {
		self.outer_branching = (lo, hi);
		self
	}
}

/// How leaf greens are picked on each render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum LeafTintConfig {
	/// Fresh random green per leaf on every frame.
	#[default]
	Flicker,
	/// Same greens every frame, derived from `seed`.
	Seeded { seed: u64 },
}

/// Everything needed to grow one tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
	pub origin: Vec3,
	pub direction: Vec3,
	pub trunk_length: f32,
	pub trunk_thickness: f32,
	pub max_level: u32,
	/// Optional cap on `max_level`. Unset by default, so any depth is accepted.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub max_level_limit: Option<u32>,
	/// Generation seed; OS entropy when absent.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub seed: Option<u64>,
	pub growth: GrowthProfile,
	pub leaf_tint: LeafTintConfig,
}

impl Default for TreeConfig {
	fn default() -> Self {
		Self {
			origin: Vec3::ZERO,
			direction: math::UP,
			trunk_length: 2.0,
			trunk_thickness: 0.15,
			max_level: 5,
			max_level_limit: None,
			seed: None,
			growth: GrowthProfile::default(),
			leaf_tint: LeafTintConfig::default(),
		}
	}
}

impl TreeConfig {
	pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
		let config: Self = toml::from_str(source)?;
		config.validate()?;
		Ok(config)
	}

	pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let source = std::fs::read_to_string(path.as_ref())?;
		log::debug!("Loaded tree config from {}", path.as_ref().display());
		Self::from_toml_str(&source)
	}

	/// Checks every generation input. Returns the normalized trunk direction.
	pub fn validate(&self) -> Result<Vec3, DomainError> {
		let direction = math::normalize(self.direction)?;
		if !self.origin.is_finite() {
			return Err(DomainError::NonFinite { what: "origin" });
		}
		DomainError::ensure_positive("trunk length", self.trunk_length)?;
		DomainError::ensure_positive("trunk thickness", self.trunk_thickness)?;
		if let Some(limit) = self.max_level_limit {
			if self.max_level > limit {
				return Err(DomainError::MaxLevelTooDeep { max_level: self.max_level, limit });
			}
		}
		self.growth.validate()?;
		Ok(direction)
	}

	pub fn with_origin(mut self, origin: Vec3) -> Self {
		self.origin = origin;
		self
	}

	pub fn with_direction(mut self, direction: Vec3) -> Self {
		self.direction = direction;
		self
	}

	pub fn with_trunk_length(mut self, trunk_length: f32) -> Self {
		self.trunk_length = trunk_length;
		self
	}

	pub fn with_trunk_thickness(mut self, trunk_thickness: f32) -> Self {
		self.trunk_thickness = trunk_thickness;
		self
	}

	pub fn with_max_level(mut self, max_level: u32) -> Self {
		self.max_level = max_level;
		self
	}

	pub fn with_max_level_limit(mut self, limit: u32) -> Self {
		self.max_level_limit = Some(limit);
		self
	}

	pub fn with_seed(mut self, seed: u64) -> Self {
		self.seed = Some(seed);
		self
	}

	pub fn with_growth(mut self, growth: GrowthProfile) -> Self {
		self.growth = growth;
		self
	}

	pub fn with_leaf_tint(mut self, leaf_tint: LeafTintConfig) -> Self {
		self.leaf_tint = leaf_tint;
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	#[test]
	fn test_defaults() {
		let config = TreeConfig::default();
		assert_eq!(config.origin, Vec3::ZERO);
		assert_eq!(config.direction, Vec3::Y);
		assert_eq!(config.trunk_length, 2.0);
		assert_eq!(config.trunk_thickness, 0.15);
		assert_eq!(config.max_level, 5);
		assert_eq!(config.validate(), Ok(Vec3::Y));
	}

	#[test]
	fn test_growth_regimes() {
		let growth = GrowthProfile::default();
		assert_eq!(growth.branching(0), (3, 5));
		assert_eq!(growth.branching(1), (3, 5));
		assert_eq!(growth.branching(2), (2, 3));
		assert_eq!(growth.spread_degrees(1), (20.0, 40.0));
		assert_eq!(growth.spread_degrees(2), (30.0, 60.0));
		assert_eq!(growth.length_factor(1), 0.8);
		assert_eq!(growth.length_factor(4), 0.6);
	}

	#[test]
	fn test_deep_max_level_is_accepted_without_a_limit() {
		let config = TreeConfig::default().with_max_level(u32::MAX);
		assert_eq!(config.max_level_limit, None);
		assert_eq!(config.validate(), Ok(Vec3::Y));

		let capped = TreeConfig::default().with_max_level(8).with_max_level_limit(8);
		assert_eq!(capped.validate(), Ok(Vec3::Y));

		let from_file = TreeConfig::from_toml_str("max_level = 40\nmax_level_limit = 50").unwrap();
		assert_eq!(from_file.max_level_limit, Some(50));
	}

	#[test]
	fn test_partial_toml_falls_back_to_defaults() {
		let config = TreeConfig::from_toml_str(
			r#"
			max_level = 3
			seed = 99
			direction = [0.0, 2.0, 0.0]

			[growth]
			thickness_factor = 0.5

			[leaf_tint]
			mode = "seeded"
			seed = 4
			"#,
		)
		.unwrap();

		assert_eq!(config.max_level, 3);
		assert_eq!(config.seed, Some(99));
		assert_eq!(config.trunk_length, 2.0);
		assert_eq!(config.growth.thickness_factor, 0.5);
		assert_eq!(config.growth.inner_branching, (3, 5));
		assert_eq!(config.leaf_tint, LeafTintConfig::Seeded { seed: 4 });
	}

	#[test]
	fn test_toml_round_trip() {
		let config = TreeConfig::default().with_seed(5).with_max_level(4);
		let source = toml::to_string(&config).unwrap();
		assert_eq!(TreeConfig::from_toml_str(&source).unwrap(), config);
	}

	#[test]
	fn test_invalid_values_are_rejected() {
		assert!(matches!(
			TreeConfig::default().with_direction(Vec3::ZERO).validate(),
			Err(DomainError::ZeroVector)
		));
		assert!(matches!(
			TreeConfig::default().with_trunk_length(0.0).validate(),
			Err(DomainError::NonPositive { what: "trunk length", .. })
		));
		assert!(matches!(
			TreeConfig::default().with_trunk_thickness(-0.1).validate(),
			Err(DomainError::NonPositive { what: "trunk thickness", .. })
		));
		assert!(matches!(
			TreeConfig::default().with_max_level(9).with_max_level_limit(8).validate(),
			Err(DomainError::MaxLevelTooDeep { max_level: 9, limit: 8 })
		));
		assert!(matches!(
			TreeConfig::default()
				.with_growth(GrowthProfile::default().with_outer_branching(0, 2))
				.validate(),
			Err(DomainError::EmptyRange { what: "outer branching", .. })
		));

		let err = TreeConfig::from_toml_str("trunk_length = -1.0").unwrap_err();
		assert!(matches!(err, ConfigError::Domain(DomainError::NonPositive { .. })));

		let err = TreeConfig::from_toml_str("max_level = \"five\"").unwrap_err();
		assert!(matches!(err, ConfigError::Parse(_)));
	}

	#[test]
	fn test_load_from_file() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "max_level = 2\ntrunk_thickness = 0.3").unwrap();

		let config = TreeConfig::load(file.path()).unwrap();
		assert_eq!(config.max_level, 2);
		assert_eq!(config.trunk_thickness, 0.3);

		let missing = TreeConfig::load(file.path().with_extension("missing"));
		assert!(matches!(missing, Err(ConfigError::Io(_))));
	}
}
