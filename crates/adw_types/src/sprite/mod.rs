//! Document model produced by the loaders: sprites, layers, cels and images.

mod cel;
mod image;
mod layer;

pub use cel::{Cel, CelKind};
pub use image::{Image, channels, rgba};
pub use layer::{Layer, LayerFlags};

/// A multi-layer, multi-frame raster sprite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
	width: u32,
	height: u32,
	/// Layers in creation order, bottom first
	layers: Vec<Layer>,
	total_frames: u32,
}

impl Sprite {
	/// Creates an empty sprite with a single frame.
	pub fn new(width: u32, height: u32) -> Self {
		Self {
			width,
			height,
			layers: Vec::new(),
			total_frames: 1,
		}
	}

	/// Returns the canvas width.
	pub fn width(&self) -> u32 {
		self.width
	}

	/// Returns the canvas height.
	pub fn height(&self) -> u32 {
		self.height
	}

	/// Returns the total number of frames.
	pub fn total_frames(&self) -> u32 {
		self.total_frames
	}

	/// Sets the total number of frames.
	pub fn set_total_frames(&mut self, total_frames: u32) {
		self.total_frames = total_frames;
	}

	/// Returns all layers, bottom first.
	pub fn layers(&self) -> &[Layer] {
		&self.layers
	}

	/// Returns the layer at `index`.
	pub fn layer(&self, index: usize) -> Option<&Layer> {
		self.layers.get(index)
	}

	/// Returns the layer at `index` mutably.
	pub fn layer_mut(&mut self, index: usize) -> Option<&mut Layer> {
		self.layers.get_mut(index)
	}

	/// Appends a layer on top and returns its index.
	pub fn add_layer(&mut self, layer: Layer) -> usize {
		self.layers.push(layer);
		self.layers.len() - 1
	}

	/// Flattens every visible layer at `frame` into one canvas-sized image.
	pub fn render_frame(&self, frame: u32) -> Image {
		let mut canvas = Image::new(self.width, self.height);
		for layer in self.layers.iter().filter(|l| l.is_visible()) {
			if let Some(cel) = layer.cel(frame) {
				let (x, y) = cel.position();
				canvas.blend_from(cel.image(), x, y);
			}
		}
		canvas
	}
}

impl std::fmt::Display for Sprite {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"Sprite: {}x{}, {} layers, {} frames",
			self.width,
			self.height,
			self.layers.len(),
			self.total_frames
		)
	}
}
