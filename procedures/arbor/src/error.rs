use thiserror::Error;

/// Errors raised while validating inputs to tree generation.
///
/// All of these are detected before the first segment is created, so a failed
/// generation never leaves a partially built tree behind.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
	#[error("cannot normalize a zero-length or non-finite vector")]
	ZeroVector,

	#[error("{what} must be finite")]
	NonFinite { what: &'static str },

	#[error("{what} must be positive and finite, got {value}")]
	NonPositive { what: &'static str, value: f32 },

	#[error("max level {max_level} exceeds the supported limit of {limit}")]
	MaxLevelTooDeep { max_level: u32, limit: u32 },

	#[error("{what} range [{lo}, {hi}] is empty")]
	EmptyRange { what: &'static str, lo: f32, hi: f32 },
}

impl DomainError {
	/// Checks that `value` is a positive finite scalar.
	pub fn ensure_positive(what: &'static str, value: f32) -> Result<f32, Self> {
		if value.is_finite() && value > 0.0 {
			Ok(value)
		} else {
			Err(Self::NonPositive { what, value })
		}
	}

	/// Checks that `[lo, hi]` is a non-empty finite range.
	pub fn ensure_range(what: &'static str, lo: f32, hi: f32) -> Result<(f32, f32), Self> {
		if lo.is_finite() && hi.is_finite() && lo <= hi {
			Ok((lo, hi))
		} else {
			Err(Self::EmptyRange { what, lo, hi })
		}
	}
}

/// Errors raised while loading a [`crate::config::TreeConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("failed to read config: {0}")]
	Io(#[from] std::io::Error),

	#[error("failed to parse config: {0}")]
	Parse(#[from] toml::de::Error),

	#[error("invalid config: {0}")]
	Domain(#[from] DomainError),
}
