//! Benchmark helper utilities for adw-rs
//!
//! This module generates synthetic `.ADW` containers for benchmarking the
//! tile decoder and the full layer/timeline reconstruction.

use std::io::Write;

use flate2::{Compression, write::ZlibEncoder};

/// Number of alpha bytes in one tile
pub const TILE_AREA: usize = 64 * 64;

/// Generates a soft radial alpha plane, which compresses to roughly a quarter
/// of its size.
pub fn generate_alpha_plane(seed: u8) -> Vec<u8> {
	let mut plane = Vec::with_capacity(TILE_AREA);
	for y in 0..64i32 {
		for x in 0..64i32 {
			let dx = x - 32;
			let dy = y - 32;
			let distance = ((dx * dx + dy * dy) as f32).sqrt();
			let alpha = (255.0 - distance * 8.0).clamp(0.0, 255.0) as u8;
			plane.push(alpha.wrapping_add(seed));
		}
	}
	plane
}

/// Compresses an alpha plane into a zlib tile payload.
pub fn compress_tile(plane: &[u8]) -> Vec<u8> {
	let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
	encoder.write_all(plane).expect("writing to a Vec cannot fail");
	encoder.finish().expect("writing to a Vec cannot fail")
}

/// Generates a container of `width` x `height` pixels with `records` layer
/// records, each fully covered by compressed tiles.
///
/// Records cycle through Background, Secondary and Normal categories so an
/// animation-mode load exercises every branch of the timeline.
pub fn generate_test_adw_data(width: u16, height: u16, records: u16) -> Vec<u8> {
	const RECORD_SIZE: u16 = 79;

	let mut data = b"AZDWDAT\x01".to_vec();
	data.extend_from_slice(&[0; 4]);
	data.extend_from_slice(&0u32.to_le_bytes());
	for value in [12u16, width, height, 72, records, 0, RECORD_SIZE] {
		data.extend_from_slice(&value.to_le_bytes());
	}

	let columns = u32::from(width).div_ceil(64) as u16;
	let rows = u32::from(height).div_ceil(64) as u16;
	let payload = compress_tile(&generate_alpha_plane(0));

	for index in 0..records {
		for corner in [0i32, 0, i32::from(width), i32::from(height)] {
			data.extend_from_slice(&corner.to_le_bytes());
		}
		data.extend_from_slice(&(u32::from(columns) * u32::from(rows)).to_le_bytes());
		data.extend_from_slice(&[0; 50]);
		data.push(0xFF);
		data.extend_from_slice(&[index as u8, 0x80, 0x40, 0x00]);
		data.push(0);
		let category = match index % 3 {
			0 => 2,
			1 => 1,
			_ => 0,
		};
		data.push(category);
		data.extend_from_slice(&2u16.to_le_bytes());

		for ty in 0..rows {
			for tx in 0..columns {
				data.extend_from_slice(&tx.to_le_bytes());
				data.extend_from_slice(&ty.to_le_bytes());
				data.extend_from_slice(&(payload.len() as u16).to_le_bytes());
				data.extend_from_slice(&payload);
			}
		}
	}

	data
}

/// Common benchmark sizes for synthetic test data
pub mod sizes {
	/// One tile: 64x64
	pub const TINY: (u16, u16) = (64, 64);
	/// Small canvas: 256x256 (16 tiles)
	pub const SMALL: (u16, u16) = (256, 256);
	/// Typical illustration canvas: 640x480 (80 tiles)
	pub const MEDIUM: (u16, u16) = (640, 480);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_generate_test_adw_data() {
		let data = generate_test_adw_data(100, 70, 3);

		assert_eq!(&data[0..7], b"AZDWDAT");
		assert_eq!(data[7], 1);
		// 3 records of 4 tiles each, plus header
		assert!(data.len() > 3 * (79 + 4 * 6));
	}

	#[test]
	fn test_alpha_plane_compresses() {
		let plane = generate_alpha_plane(0);
		assert_eq!(plane.len(), TILE_AREA);
		assert!(compress_tile(&plane).len() < TILE_AREA);
	}
}
