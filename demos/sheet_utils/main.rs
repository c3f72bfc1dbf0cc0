//! Spritesheet inspection and playback utility.
//!
//! Provides two subcommands:
//! - `inspect`: load an Aseprite JSON export (or a plain-text listing with
//!   `--listing`) and print its metadata, tags and frames.
//! - `simulate`: play one tag for a number of fixed ticks and log every
//!   notification the player emits.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example sheet_utils inspect tests/data/hero.json
//! cargo run --example sheet_utils inspect --listing --fps 8 tests/data/explosion.txt
//! cargo run --example sheet_utils simulate tests/data/hero.json --tag run --ticks 20
//! ```

use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result, bail};
use aseplay_rs::prelude::*;
use clap::{Args, Parser, Subcommand};
use log::info;

fn main() -> Result<()> {
	// Initialize logger with default level set to info if RUST_LOG is not set
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	match cli.command {
		Command::Inspect(opts) => run_inspect(opts),
		Command::Simulate(opts) => run_simulate(opts),
	}
}

#[derive(Parser)]
#[command(name = "sheet_utils")]
#[command(author = "aseplay-rs project")]
#[command(version)]
#[command(about = "Inspect spritesheets and simulate tag playback", long_about = None)]
struct Cli {
	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	/// Print sheet metadata, tags and frames
	Inspect(InspectArgs),
	/// Play a tag for a fixed number of ticks and log notifications
	Simulate(SimulateArgs),
}

#[derive(Args)]
struct SourceArgs {
	/// Aseprite JSON export, or a listing when `--listing` is given
	#[arg(value_name = "FILE")]
	file: PathBuf,

	/// Treat the input as a plain-text `tag/name = x y w h` listing
	#[arg(short, long, default_value_t = false)]
	listing: bool,

	/// Frames per second for listings (every frame has the same duration)
	#[arg(long, value_name = "FPS", default_value_t = 10.0)]
	fps: f32,
}

#[derive(Args)]
struct InspectArgs {
	#[command(flatten)]
	source: SourceArgs,

	/// Also print every frame
	#[arg(short, long, default_value_t = false)]
	verbose: bool,
}

#[derive(Args)]
struct SimulateArgs {
	#[command(flatten)]
	source: SourceArgs,

	/// Tag to play; empty plays every frame
	#[arg(short, long, value_name = "NAME", default_value = "")]
	tag: String,

	/// Number of ticks to simulate
	#[arg(long, value_name = "COUNT", default_value_t = 60)]
	ticks: usize,

	/// Seconds per tick
	#[arg(long, value_name = "SECONDS", default_value_t = 1.0 / 60.0)]
	dt: f32,

	/// Playback speed multiplier
	#[arg(short, long, default_value_t = 1.0)]
	speed: f32,
}

fn load_sheet(source: &SourceArgs) -> Result<SpriteSheet> {
	if !source.file.is_file() {
		bail!("{} is not a file", source.file.display());
	}

	let sheet = if source.listing {
		if !(source.fps.is_finite() && source.fps > 0.0) {
			bail!("--fps must be a positive number, got {}", source.fps);
		}
		listing::open(&source.file, &ParseConfig::from_fps(source.fps))
	} else {
		aseprite::open(&source.file)
	}
	.with_context(|| format!("Failed to load {}", source.file.display()))?;

	Ok(sheet)
}

fn run_inspect(args: InspectArgs) -> Result<()> {
	let sheet = load_sheet(&args.source)?;

	println!("{sheet}");
	println!("  Image: {}", sheet.image_path().display());

	println!("\nTags:");
	for tag in sheet.tags() {
		let name = if tag.name().is_empty() { "(all frames)" } else { tag.name() };
		let duration: f32 = sheet.frames()[tag.start()..=tag.end()].iter().map(Frame::duration).sum();
		println!(
			"  {:<16} [{:>3}, {:>3}] {:<8} {} frames, {:.3}s per pass",
			name,
			tag.start(),
			tag.end(),
			tag.direction(),
			tag.len(),
			duration
		);
	}

	if !sheet.layers().is_empty() {
		println!("\nLayers:");
		for layer in sheet.layers() {
			println!("  {:<16} opacity {:>3} {}", layer.name, layer.opacity, layer.blend_mode);
		}
	}

	if !sheet.slices().is_empty() {
		println!("\nSlices:");
		for slice in sheet.slices() {
			println!("  {:<16} #{:08x} {} keys", slice.name, slice.color, slice.keys.len());
		}
	}

	if args.verbose {
		println!("\nFrames:");
		for (index, frame) in sheet.frames().iter().enumerate() {
			let tags: Vec<&str> =
				sheet.tags_at(index).map(Tag::name).filter(|name| !name.is_empty()).collect();
			println!("  {index:>4}: {frame} {}", tags.join(", "));
		}
	}

	Ok(())
}

fn run_simulate(args: SimulateArgs) -> Result<()> {
	if !args.dt.is_finite() || args.dt < 0.0 {
		bail!("--dt must be a non-negative number, got {}", args.dt);
	}

	let sheet = Arc::new(load_sheet(&args.source)?);
	let mut player = Player::new(sheet);
	player
		.on_loop(|p| info!("loop        tag '{}'", p.current_tag().map_or("", Tag::name)))
		.on_frame_change(|_, index| info!("frame       -> {index}"))
		.on_tag_exit(|p, tag| info!("tag exit    '{}' at frame {}", tag.name(), p.frame_index()))
		.on_tag_enter(|p, tag| info!("tag enter   '{}' at frame {}", tag.name(), p.frame_index()));
	player.set_play_speed(args.speed);

	player.play(&args.tag).with_context(|| {
		let known: Vec<&str> = player.sheet().tags().iter().map(Tag::name).collect();
		format!("Known tags: {known:?}")
	})?;

	for tick in 0..args.ticks {
		player.advance(args.dt);
		let (x0, y0, x1, y1) = player.current_frame_rect().to_tuple();
		log::debug!("tick {tick:>4}: frame {} rect ({x0}, {y0})..({x1}, {y1})", player.frame_index());
	}

	println!(
		"Finished {} ticks on frame {} ({} into '{}')",
		args.ticks,
		player.frame_index(),
		player.frame_index_in_animation().unwrap_or_default(),
		args.tag
	);
	Ok(())
}
