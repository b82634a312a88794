use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of randomness consumed by the generator and by leaf tinting.
pub trait Entropy {
	/// Uniform integer in `[lo, hi]`.
	fn int_in(&mut self, lo: u32, hi: u32) -> u32;

	/// Uniform real in `[lo, hi)`, or `lo` when the range is a single point.
	fn real_in(&mut self, lo: f32, hi: f32) -> f32;
}

impl<R: Rng> Entropy for R {
	fn int_in(&mut self, lo: u32, hi: u32) -> u32 {
		if lo >= hi {
			return lo;
		}
		self.random_range(lo..=hi)
	}

	fn real_in(&mut self, lo: f32, hi: f32) -> f32 {
		// NaN bounds would panic inside the sampler
		if lo.is_nan() || hi.is_nan() || lo >= hi {
			return lo;
		}
		self.random_range(lo..hi)
	}
}

/// Seeded generator when a seed is given, OS entropy otherwise.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
	match seed {
		Some(seed) => StdRng::seed_from_u64(seed),
		None => StdRng::from_os_rng(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_ranges_are_respected() {
		let mut rng = rng_from_seed(Some(7));
		for _ in 0..1000 {
			let count = rng.int_in(3, 5);
			assert!((3..=5).contains(&count));

			let spread = rng.real_in(20.0, 40.0);
			assert!((20.0..40.0).contains(&spread));
		}
	}

	#[test]
	fn test_point_ranges() {
		let mut rng = rng_from_seed(Some(7));
		assert_eq!(rng.int_in(3, 3), 3);
		assert_eq!(rng.real_in(0.7, 0.7), 0.7);
	}

	#[test]
	fn test_degenerate_real_ranges_return_lo() {
		let mut rng = rng_from_seed(Some(7));
		assert_eq!(rng.real_in(0.8, 0.6), 0.8);
		assert!(rng.real_in(f32::NAN, 1.0).is_nan());
		assert_eq!(rng.real_in(0.0, f32::NAN), 0.0);
	}

	#[test]
	fn test_seeded_sources_agree() {
		let mut a = rng_from_seed(Some(42));
		let mut b = rng_from_seed(Some(42));
		for _ in 0..32 {
			assert_eq!(a.int_in(0, 100), b.int_in(0, 100));
			assert_eq!(a.real_in(0.0, 1.0), b.real_in(0.0, 1.0));
		}
	}
}
