//! Tile payload decoding.
//!
//! Each tile is a 64x64 alpha plane stored either raw (payload size 4096) or as
//! a zlib stream shorter than 4096 bytes. One inflater is created per load and
//! reset before every compressed tile.

use std::io::Read;

use flate2::{Decompress, FlushDecompress, Status};
use log::trace;

use super::constants::TILE_AREA;
use crate::file::AdwError;

/// Tile decoder holding the zlib inflater and a scratch buffer for one
/// compressed plus one decompressed tile.
pub struct TileDecoder {
	inflater: Decompress,
	scratch: Vec<u8>,
}

impl TileDecoder {
	/// Creates a decoder with a fresh zlib inflater.
	pub fn new() -> Self {
		Self {
			inflater: Decompress::new(true),
			scratch: vec![0; TILE_AREA * 2],
		}
	}

	/// Reads a tile payload of `size` bytes from `reader` and returns its alpha plane.
	///
	/// # Errors
	///
	/// Returns an error if `size` is 0 or above 4096, the source is short, or a
	/// compressed payload does not inflate to exactly 4096 bytes.
	pub fn read_tile<R: Read>(&mut self, reader: &mut R, size: u16) -> Result<&[u8], AdwError> {
		let len = validate_size(size)?;
		let (input, output) = self.scratch.split_at_mut(TILE_AREA);

		if len == TILE_AREA {
			reader.read_exact(output)?;
			return Ok(&*output);
		}

		reader.read_exact(&mut input[..len])?;
		self.inflater.reset(true);
		inflate(&mut self.inflater, &input[..len], output)?;
		Ok(&*output)
	}

	/// Decodes an in-memory tile payload and returns its alpha plane.
	///
	/// The payload length plays the role of the on-disk size field.
	pub fn decode(&mut self, payload: &[u8]) -> Result<&[u8], AdwError> {
		let size = u16::try_from(payload.len()).map_err(|_| AdwError::InvalidTileSize(u16::MAX))?;
		let mut cursor = payload;
		self.read_tile(&mut cursor, size)
	}
}

impl Default for TileDecoder {
	fn default() -> Self {
		Self::new()
	}
}

impl std::fmt::Debug for TileDecoder {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("TileDecoder")
			.field("total_in", &self.inflater.total_in())
			.field("total_out", &self.inflater.total_out())
			.finish()
	}
}

fn validate_size(size: u16) -> Result<usize, AdwError> {
	let len = usize::from(size);
	if len == 0 || len > TILE_AREA {
		return Err(AdwError::InvalidTileSize(size));
	}
	Ok(len)
}

/// Inflates `input` into `output`, which must be filled exactly.
fn inflate(inflater: &mut Decompress, input: &[u8], output: &mut [u8]) -> Result<(), AdwError> {
	let mut consumed = 0;
	let mut produced = 0;

	loop {
		let in_before = inflater.total_in();
		let out_before = inflater.total_out();
		let status = inflater
			.decompress(&input[consumed..], &mut output[produced..], FlushDecompress::Finish)
			.map_err(|e| AdwError::DecompressionError(e.to_string()))?;
		let read = (inflater.total_in() - in_before) as usize;
		let written = (inflater.total_out() - out_before) as usize;
		consumed += read;
		produced += written;

		match status {
			Status::StreamEnd => break,
			Status::Ok if read > 0 || written > 0 => {}
			Status::Ok | Status::BufError => {
				return Err(AdwError::DecompressionError(format!(
					"stream stalled after {consumed} of {} input bytes, {produced} bytes inflated",
					input.len()
				)));
			}
		}
	}

	trace!("Inflated {consumed} bytes into {produced}");
	if produced != output.len() {
		return Err(AdwError::DecompressionError(format!(
			"inflated {produced} bytes, expected {}",
			output.len()
		)));
	}

	Ok(())
}
