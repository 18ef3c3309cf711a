//! Single-pass sprite reconstruction from the layer records.

use std::io::{Read, Seek};

use log::debug;

use super::assemble::read_image;
use super::header::Header;
use super::options::{LoadOptions, Progress};
use super::record::LayerRecord;
use super::state::{DecodeState, Route};
use super::tile::TileDecoder;
use crate::{file::AdwError, sprite::Sprite};

/// Decodes every layer record following `header`.
///
/// The sprite is only returned once all records and tiles have been read; any
/// error drops the partial sprite along with the inflater.
pub(super) fn decode<R, P>(
	reader: &mut R,
	header: &Header,
	options: &LoadOptions,
	progress: &mut P,
) -> Result<Sprite, AdwError>
where
	R: Read + Seek,
	P: Progress + ?Sized,
{
	let mut sprite = Sprite::new(u32::from(header.width()), u32::from(header.height()));
	let mut state = DecodeState::new(options.animation);
	let mut tiles = TileDecoder::new();
	let total = header.layer_count();

	for processed in 1..=total {
		let record = LayerRecord::from_reader(reader, header.layer_info_size())?;
		let route = state.route(&mut sprite, &record);
		// Tiles of gap and dropped records are still read so the stream stays aligned.
		let image = read_image(reader, &record, &mut tiles)?;

		match route {
			Route::Gap => state.close_gap(&mut sprite),
			Route::Skip => debug!("Dropped record {record}"),
			Route::Layer(layer) => {
				state.place(&mut sprite, layer, &record, image);
				state.previous = Some(record.category());
			}
		}

		debug!("Processed layer record {processed}/{total}");
		progress.set_progress(processed / total);
	}

	sprite.set_total_frames(state.total_frames());
	debug!("{sprite}");

	Ok(sprite)
}
