use anyhow::Context;
use arbor::{DrawCommand, TreeConfig};
use arbor_playground::{FrameDriver, FrameStats, Overrides};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
	/// Log per-frame counts.
	Summary,
	/// Print every frame's draw commands as JSON on stdout.
	Json,
}

/// Grows one tree and drives it for a number of frames without opening a window.
#[derive(Debug, Parser)]
#[command(name = "arbor-playground", version)]
struct Args {
	/// TOML tree config; defaults are used for anything it leaves out.
	#[arg(long)]
	config: Option<PathBuf>,

	#[command(flatten)]
	overrides: Overrides,

	#[arg(long, default_value_t = 1)]
	frames: usize,

	#[arg(long, value_enum, default_value_t = Format::Summary)]
	format: Format,
}

#[derive(Serialize)]
struct Frame {
	stats: FrameStats,
	commands: Vec<DrawCommand>,
}

fn main() -> anyhow::Result<()> {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
		.with_writer(std::io::stderr)
		.init();

	let args = Args::parse();

	let file_config = match &args.config {
		Some(path) => TreeConfig::load(path)
			.with_context(|| format!("loading tree config from {}", path.display()))?,
		None => TreeConfig::default(),
	};
	let config = args.overrides.apply(file_config);

	log::info!("Starting arbor playground with seed: {:?}", config.seed);

	let mut driver = FrameDriver::new(&config).context("generating tree")?;
	let mut frames = Vec::new();

	for _ in 0..args.frames {
		driver.next_frame();
		let stats = driver.stats();

		match args.format {
			Format::Summary => log::info!(
				"Frame {}: rotation {}°, {} cylinders, {} leaves",
				stats.frame,
				stats.rotation_degrees,
				stats.cylinders,
				stats.leaves
			),
			Format::Json => frames.push(Frame { stats, commands: driver.commands().to_vec() }),
		}
	}

	if args.format == Format::Json {
		serde_json::to_writer_pretty(std::io::stdout().lock(), &frames)
			.context("writing frames as json")?;
		println!();
	}

	Ok(())
}
