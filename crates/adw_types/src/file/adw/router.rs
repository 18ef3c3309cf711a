//! Layer classification: which sprite layer receives a record's image.
//!
//! In still mode every record gets a layer of its own. In animation mode the
//! category decides:
//!
//! | Category   | Destination                                              |
//! |------------|----------------------------------------------------------|
//! | Normal     | the single main layer, created on first use              |
//! | Secondary  | `secondary[secondary_index++]`, restarted by each Normal |
//! | Background | `background[background_index++]`, restarted per group    |
//! | Hidden     | none; the record marks an empty frame                    |
//! | Unknown    | none; the record is read and dropped                     |

use log::debug;

use super::record::{Category, LayerRecord};
use super::state::{DecodeState, Route};
use crate::sprite::{Layer, LayerFlags, Sprite};

impl DecodeState {
	/// Picks (creating if needed) the destination layer for `record`.
	pub(super) fn route(&mut self, sprite: &mut Sprite, record: &LayerRecord) -> Route {
		if !self.animation {
			let flags = match record.category() {
				Category::Hidden => LayerFlags::HIDDEN,
				_ => LayerFlags::STILL,
			};
			let index = sprite.add_layer(Layer::new(record.name(), flags));
			self.main_layer = Some(index);
			return Route::Layer(index);
		}

		let make = || Layer::new(record.name(), LayerFlags::ANIMATED);
		let route = match record.category() {
			Category::Normal => {
				let index = *self.main_layer.get_or_insert_with(|| sprite.add_layer(make()));
				self.secondary_index = 0;
				Route::Layer(index)
			}
			Category::Secondary => {
				let index = self.secondary.get_or_create(self.secondary_index, sprite, make);
				self.secondary_index += 1;
				self.secondary.skip_first = true;
				Route::Layer(index)
			}
			Category::Background => {
				if self.previous != Some(Category::Background) {
					self.background.pending.clear();
					self.background_index = 0;
				}
				let index = self.background.get_or_create(self.background_index, sprite, make);
				self.background_index += 1;
				self.background.skip_first = true;
				Route::Layer(index)
			}
			Category::Hidden => Route::Gap,
			Category::Unknown(_) => Route::Skip,
		};

		debug!("Record {record} -> {route:?}");
		route
	}

	/// Applies an animation-mode hidden record: the current frame is left empty
	/// on every secondary layer and pending secondary cels are dropped.
	pub(super) fn close_gap(&mut self, sprite: &mut Sprite) {
		for &index in self.secondary.layers() {
			if let Some(layer) = sprite.layer_mut(index) {
				layer.remove_cel(self.frame);
			}
		}
		self.secondary.pending.clear();
	}
}
