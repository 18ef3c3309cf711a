//! ADW CLI Utility
//!
//! A command-line tool for inspecting `.ADW` layered animation containers and
//! exporting their frames.
//!
//! # Features
//!
//! - **info**: Display the header, layers and frame count of a container
//! - **export**: Flatten every frame and write it as a PNG image
//!
//! # Load Options
//!
//! Animation mode is off by default, producing one layer per record on a single
//! frame. Pass `--anim`, or a JSON options file such as `{ "animation": true }`
//! with `--options`, to rebuild the animation timeline.
//!
//! # Usage
//!
//! ```bash
//! # Show container information
//! cargo run --bin adw_utils -- info WALK.ADW --anim
//!
//! # Same, as JSON
//! cargo run --bin adw_utils -- info WALK.ADW --anim --json
//!
//! # Export all frames to PNG files
//! cargo run --bin adw_utils -- export WALK.ADW frames/ --anim
//! ```

use std::path::{Path, PathBuf};

use adw_rs::prelude::*;
use anyhow::{Context, Result, anyhow};
use clap::{Args, Parser, Subcommand};
use image::RgbaImage;
use log::{debug, info};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "adw_utils")]
#[command(author = "adw-rs project")]
#[command(version = "1.0")]
#[command(about = "ADW container utility - inspect layers and export frames", long_about = None)]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Display information about an ADW file
	Info {
		/// Input ADW file path
		#[arg(value_name = "INPUT_ADW")]
		input: PathBuf,

		#[command(flatten)]
		load: LoadArgs,

		/// Print the summary as JSON
		#[arg(long)]
		json: bool,
	},

	/// Export every frame of an ADW file as PNG images
	Export {
		/// Input ADW file path
		#[arg(value_name = "INPUT_ADW")]
		input: PathBuf,

		/// Output directory
		#[arg(value_name = "OUTPUT_DIR")]
		output: PathBuf,

		#[command(flatten)]
		load: LoadArgs,
	},
}

#[derive(Args)]
struct LoadArgs {
	/// Rebuild the animation timeline instead of loading a single frame
	#[arg(short, long)]
	anim: bool,

	/// JSON file with load options
	#[arg(long, value_name = "OPTIONS_JSON")]
	options: Option<PathBuf>,
}

impl LoadArgs {
	fn resolve(&self) -> Result<LoadOptions> {
		let mut options = match &self.options {
			Some(path) => {
				let text = std::fs::read_to_string(path)
					.with_context(|| format!("Cannot read options file {}", path.display()))?;
				serde_json::from_str::<LoadOptions>(&text)
					.with_context(|| format!("Invalid options file {}", path.display()))?
			}
			None => LoadOptions::default(),
		};
		if self.anim {
			options.animation = true;
		}
		Ok(options)
	}
}

#[derive(Serialize)]
struct Summary {
	version: u8,
	width: u16,
	height: u16,
	dpi: u16,
	selected_layer: u16,
	total_frames: u32,
	layers: Vec<LayerSummary>,
}

#[derive(Serialize)]
struct LayerSummary {
	name: String,
	flags: u8,
	visible: bool,
	cels: usize,
	linked_cels: usize,
	frames: Vec<u32>,
}

impl Summary {
	fn new(adw: &AdwFile) -> Self {
		let header = adw.header();
		let sprite = adw.sprite();
		Self {
			version: header.version().selector(),
			width: header.width(),
			height: header.height(),
			dpi: header.dpi(),
			selected_layer: header.selected_layer(),
			total_frames: sprite.total_frames(),
			layers: sprite
				.layers()
				.iter()
				.map(|layer| LayerSummary {
					name: layer.name().to_string(),
					flags: layer.flags().bits(),
					visible: layer.is_visible(),
					cels: layer.cel_count(),
					linked_cels: layer.cels().filter(|cel| cel.is_link()).count(),
					frames: layer.cels().map(Cel::frame).collect(),
				})
				.collect(),
		}
	}
}

fn load(input: &Path, options: &LoadOptions) -> Result<AdwFile> {
	debug!("Loading {} with {:?}", input.display(), options);
	AdwFile::open(input, options).with_context(|| format!("Failed to load {}", input.display()))
}

fn cmd_info(input: &Path, options: &LoadOptions, json: bool) -> Result<()> {
	let adw = load(input, options)?;
	let summary = Summary::new(&adw);

	if json {
		println!("{}", serde_json::to_string_pretty(&summary)?);
		return Ok(());
	}

	println!("{}", adw.header());
	println!("{}", adw.sprite());
	for (index, layer) in summary.layers.iter().enumerate() {
		println!(
			"  [{index}] \"{}\" flags=0x{:02X}{} cels={} (linked {})",
			layer.name,
			layer.flags,
			if layer.visible { "" } else { " hidden" },
			layer.cels,
			layer.linked_cels,
		);
	}

	Ok(())
}

fn cmd_export(input: &Path, output: &Path, options: &LoadOptions) -> Result<()> {
	let adw = load(input, options)?;
	let sprite = adw.sprite();

	std::fs::create_dir_all(output)
		.with_context(|| format!("Cannot create output directory {}", output.display()))?;

	for frame in 0..sprite.total_frames() {
		let canvas = sprite.render_frame(frame);
		let image = RgbaImage::from_raw(canvas.width(), canvas.height(), canvas.to_rgba8())
			.ok_or_else(|| anyhow!("Failed to create image buffer for frame {frame}"))?;

		let path = output.join(format!("frame_{frame:03}.png"));
		image.save(&path).with_context(|| format!("Cannot write {}", path.display()))?;
		debug!("Wrote {}", path.display());
	}

	info!("Exported {} frames to {}", sprite.total_frames(), output.display());
	Ok(())
}

fn main() -> Result<()> {
	// Initialize logger with default level set to info if RUST_LOG is not set
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	match &cli.command {
		Commands::Info {
			input,
			load,
			json,
		} => cmd_info(input, &load.resolve()?, *json),
		Commands::Export {
			input,
			output,
			load,
		} => cmd_export(input, output, &load.resolve()?),
	}
}
