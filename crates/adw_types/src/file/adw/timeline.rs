//! Cel placement and hold expansion.
//!
//! A Normal record of hold count `n` whose cel lands on frame `P` covers frames
//! `P..P + n` on the main layer: the primary cel at `P` and linked cels after
//! it. The same range is then filled with links on every layer that has a
//! pending secondary or background cel. The first expansion after a record of
//! that pool starts at `P + 1`, since the pending cel itself already sits on
//! `P`.

use super::record::{Category, LayerRecord};
use super::state::{DecodeState, LayerPool, PendingCel};
use crate::sprite::{Cel, Image, Sprite};

impl DecodeState {
	/// Wraps `image` in a cel on `layer` and schedules any held frames.
	pub(super) fn place(&mut self, sprite: &mut Sprite, layer: usize, record: &LayerRecord, image: Image) {
		let rect = record.rect();

		if !self.animation {
			add_cel(sprite, layer, Cel::new(0, rect.x, rect.y, image));
			return;
		}

		let cel = Cel::new(self.frame, rect.x, rect.y, image);
		match record.category() {
			Category::Normal | Category::Hidden => {
				let start = cel.frame();
				let hold = u32::from(record.hold_count());
				self.frame += 1;
				for _ in 1..hold {
					add_cel(sprite, layer, cel.link(self.frame));
					self.frame += 1;
				}
				add_cel(sprite, layer, cel);

				expand(&self.secondary, sprite, start, hold);
				self.secondary.pending.clear();
				expand(&self.background, sprite, start, hold);
				self.secondary.skip_first = false;
				self.background.skip_first = false;
			}
			Category::Secondary => {
				self.secondary.pending.push(PendingCel {
					layer,
					cel: cel.clone(),
				});
				add_cel(sprite, layer, cel);
			}
			Category::Background => {
				self.background.pending.push(PendingCel {
					layer,
					cel: cel.clone(),
				});
				add_cel(sprite, layer, cel);
			}
			// routed to `Route::Skip` before any layer is chosen
			Category::Unknown(_) => {}
		}
	}
}

/// Links every pending cel of `pool` across frames `start..start + hold`.
fn expand(pool: &LayerPool, sprite: &mut Sprite, start: u32, hold: u32) {
	let first = u32::from(pool.skip_first);
	for pending in &pool.pending {
		for offset in first..hold {
			add_cel(sprite, pending.layer, pending.cel.link(start + offset));
		}
	}
}

fn add_cel(sprite: &mut Sprite, layer: usize, cel: Cel) {
	if let Some(layer) = sprite.layer_mut(layer) {
		layer.add_cel(cel);
	}
}
