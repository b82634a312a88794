use arbor::TreeConfig;
use clap::Args;

/// Command line values that take precedence over the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct Overrides {
	#[arg(long)]
	pub seed: Option<u64>,

	#[arg(long)]
	pub max_level: Option<u32>,
}

impl Overrides {
	pub fn apply(&self, mut config: TreeConfig) -> TreeConfig {
		if let Some(seed) = self.seed {
			config = config.with_seed(seed);
		}
		if let Some(max_level) = self.max_level {
			config = config.with_max_level(max_level);
		}
		config
	}
}
