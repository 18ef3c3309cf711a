//! Mutable state carried from one layer record to the next during a load.

use super::record::Category;
use crate::sprite::{Cel, Layer, Sprite};

/// A cel waiting to be repeated across the next main frame group.
#[derive(Debug, Clone)]
pub(super) struct PendingCel {
	/// Index of the owning layer in the sprite
	pub layer: usize,
	pub cel: Cel,
}

/// An ordered pool of sprite layers addressed by position within a group.
#[derive(Debug, Default)]
pub(super) struct LayerPool {
	/// Sprite layer indices, in pool order
	layers: Vec<usize>,
	pub pending: Vec<PendingCel>,
	/// The next expansion omits the group's first frame
	pub skip_first: bool,
}

impl LayerPool {
	fn new() -> Self {
		Self {
			skip_first: true,
			..Self::default()
		}
	}

	/// Returns the sprite index of the `position`-th layer, appending a new
	/// layer to the sprite when the pool is not that long yet.
	pub fn get_or_create(
		&mut self,
		position: usize,
		sprite: &mut Sprite,
		make: impl FnOnce() -> Layer,
	) -> usize {
		if let Some(&index) = self.layers.get(position) {
			return index;
		}
		let index = sprite.add_layer(make());
		self.layers.push(index);
		index
	}

	/// Sprite indices of every layer in the pool.
	pub fn layers(&self) -> &[usize] {
		&self.layers
	}
}

/// Where a record's content goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Route {
	/// Paint into the sprite layer with this index
	Layer(usize),
	/// Animation-mode hidden record: an empty frame, no cel
	Gap,
	/// Animation-mode record of unknown category: read and dropped
	Skip,
}

/// Decoder state shared by the router and the timeline.
#[derive(Debug)]
pub(super) struct DecodeState {
	pub animation: bool,
	/// Next frame index for main content
	pub frame: u32,
	pub secondary_index: usize,
	pub background_index: usize,
	pub main_layer: Option<usize>,
	pub secondary: LayerPool,
	pub background: LayerPool,
	/// Category of the last record that produced a cel
	pub previous: Option<Category>,
}

impl DecodeState {
	pub fn new(animation: bool) -> Self {
		Self {
			animation,
			frame: 0,
			secondary_index: 0,
			background_index: 0,
			main_layer: None,
			secondary: LayerPool::new(),
			background: LayerPool::new(),
			previous: None,
		}
	}

	/// Total frame count of the finished sprite.
	pub fn total_frames(&self) -> u32 {
		if self.animation { self.frame } else { 1 }
	}
}
