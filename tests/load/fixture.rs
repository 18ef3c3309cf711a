//! In-memory `.ADW` container writer for tests.

use std::io::Write;

use flate2::{Compression, write::ZlibEncoder};

pub(crate) const TILE_AREA: usize = 64 * 64;

pub(crate) enum Payload {
	Raw(Vec<u8>),
	Zlib(Vec<u8>),
	Bytes(Vec<u8>),
}

impl Payload {
	fn encode(&self) -> Vec<u8> {
		match self {
			Self::Raw(plane) => plane.clone(),
			Self::Zlib(plane) => {
				let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
				encoder.write_all(plane).unwrap();
				encoder.finish().unwrap()
			}
			Self::Bytes(bytes) => bytes.clone(),
		}
	}
}

pub(crate) struct Record {
	pub corners: [i32; 4],
	pub name: String,
	pub bgra: [u8; 4],
	pub category: u8,
	pub hold: u16,
	pub tiles: Vec<(u16, u16, Payload)>,
}

impl Record {
	pub fn new(category: u8, hold: u16) -> Self {
		Self {
			corners: [0, 0, 64, 64],
			name: format!("record {category}"),
			bgra: [0x00, 0xFF, 0x00, 0x00],
			category,
			hold,
			tiles: vec![(0, 0, Payload::Raw(vec![0xFF; TILE_AREA]))],
		}
	}
}

/// Builds a container with a 32-byte skipped block and 16 bytes of record padding.
pub(crate) fn build(width: u16, height: u16, records: &[Record]) -> Vec<u8> {
	const RECORD_SIZE: u16 = 79 + 16;

	let mut data = b"AZDWDAT\x01".to_vec();
	data.extend_from_slice(&[0xAA; 4]);
	data.extend_from_slice(&32u32.to_le_bytes());
	data.extend_from_slice(&[0x55; 32]);
	for value in [12u16, width, height, 96, records.len() as u16, 0, RECORD_SIZE] {
		data.extend_from_slice(&value.to_le_bytes());
	}

	for record in records {
		for corner in record.corners {
			data.extend_from_slice(&corner.to_le_bytes());
		}
		data.extend_from_slice(&(record.tiles.len() as u32).to_le_bytes());
		let mut name = [0u8; 50];
		for (i, unit) in record.name.encode_utf16().take(25).enumerate() {
			name[i * 2..i * 2 + 2].copy_from_slice(&unit.to_le_bytes());
		}
		data.extend_from_slice(&name);
		data.push(0xFF);
		data.extend_from_slice(&record.bgra);
		data.push(0);
		data.push(record.category);
		data.extend_from_slice(&record.hold.to_le_bytes());
		data.extend_from_slice(&[0; 16]);

		for (x, y, payload) in &record.tiles {
			let bytes = payload.encode();
			data.extend_from_slice(&x.to_le_bytes());
			data.extend_from_slice(&y.to_le_bytes());
			data.extend_from_slice(&(bytes.len() as u16).to_le_bytes());
			data.extend_from_slice(&bytes);
		}
	}

	data
}
