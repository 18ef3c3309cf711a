//! Painting a record's tiles into its image.

use std::io::Read;

use log::trace;

use super::bytes::read_u16;
use super::constants::TILE_SIZE;
use super::record::{LayerRecord, Rect};
use super::tile::TileDecoder;
use crate::{file::AdwError, sprite::Image};

/// Reads every tile of `record` and paints it into a new image of the record's size.
///
/// # Errors
///
/// Fails if the record's rectangle cannot be allocated, or on the first tile
/// with an out-of-grid index, an invalid payload size, a short read, or a
/// payload that does not inflate to a full tile.
pub fn read_image<R: Read>(
	reader: &mut R,
	record: &LayerRecord,
	tiles: &mut TileDecoder,
) -> Result<Image, AdwError> {
	let rect = record.rect();
	let mut image = Image::try_new(rect.width, rect.height).ok_or(AdwError::ImageTooLarge {
		width: rect.width,
		height: rect.height,
	})?;

	for _ in 0..record.tile_count() {
		let tx = read_u16(reader)?;
		let ty = read_u16(reader)?;
		let size = read_u16(reader)?;
		check_tile_index(&rect, tx, ty)?;

		trace!("Tile ({tx}, {ty}), {size} bytes");
		let alpha = tiles.read_tile(reader, size)?;
		paint_tile(&mut image, tx, ty, alpha, record.color());
	}

	Ok(image)
}

/// Rejects tiles that lie outside the tile grid covering `rect`.
pub fn check_tile_index(rect: &Rect, tx: u16, ty: u16) -> Result<(), AdwError> {
	let columns = rect.tile_columns();
	let rows = rect.tile_rows();
	if u32::from(tx) >= columns || u32::from(ty) >= rows {
		return Err(AdwError::InvalidTileIndex {
			x: tx,
			y: ty,
			columns,
			rows,
		});
	}
	Ok(())
}

/// Paints one 64x64 alpha plane at tile `(tx, ty)` of `image`.
///
/// Each pixel becomes `color | (alpha << 24)`; pixels past the image edge are dropped.
pub fn paint_tile(image: &mut Image, tx: u16, ty: u16, alpha: &[u8], color: u32) {
	let left = u32::from(tx) * TILE_SIZE;
	let top = u32::from(ty) * TILE_SIZE;
	let columns = TILE_SIZE.min(image.width().saturating_sub(left));
	let rows = TILE_SIZE.min(image.height().saturating_sub(top));

	for row in 0..rows {
		let line = &alpha[(row * TILE_SIZE) as usize..][..columns as usize];
		for (column, &a) in line.iter().enumerate() {
			image.put_pixel(left + column as u32, top + row, color | (u32::from(a) << 24));
		}
	}
}
