//! Container signature and header.

use std::{
	fmt::Display,
	io::{Read, Seek, SeekFrom},
};

use log::debug;

use super::bytes::{read_u8, read_u16, read_u32, skip};
use super::constants::{CONTAINER_HEADER_FIXED_SIZE, HEADER_BLOCK_LENGTH_OFFSET, MAGIC};
use crate::file::AdwError;

/// Container layouts this crate can load, keyed by the selector byte after the magic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Version {
	/// Tiled, zlib-compressed layer records (selector `1`)
	V2 = 1,
}

impl Version {
	/// Maps a selector byte to a known layout.
	pub fn from_selector(selector: u8) -> Result<Self, AdwError> {
		match selector {
			1 => Ok(Self::V2),
			_ => Err(AdwError::UnsupportedVersion(selector)),
		}
	}

	/// Returns the selector byte.
	pub fn selector(self) -> u8 {
		self as u8
	}
}

impl Display for Version {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::V2 => write!(f, "v2"),
		}
	}
}

/// Header of an `.ADW` container, read once before the layer records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Header {
	version: Version,
	header_size: u16,
	width: u16,
	height: u16,
	dpi: u16,
	layer_count: u16,
	selected_layer: u16,
	layer_info_size: u16,
}

impl Header {
	/// Reads the signature and header, leaving `reader` at the first layer record.
	///
	/// # Errors
	///
	/// Returns an error if:
	/// - The magic is not `AZDWDAT` or the version selector is unknown
	/// - The source ends before the header is complete
	pub fn from_reader<R: Read + Seek>(reader: &mut R) -> Result<Self, AdwError> {
		let mut magic = [0u8; 7];
		reader.read_exact(&mut magic)?;
		if magic != MAGIC {
			return Err(AdwError::InvalidMagic(magic));
		}
		let version = Version::from_selector(read_u8(reader)?)?;

		reader.seek(SeekFrom::Start(HEADER_BLOCK_LENGTH_OFFSET))?;
		let block_length = read_u32(reader)?;
		skip(reader, i64::from(block_length))?;

		let header_size = read_u16(reader)?;
		let width = read_u16(reader)?;
		let height = read_u16(reader)?;
		let dpi = read_u16(reader)?;
		let layer_count = read_u16(reader)?;
		let selected_layer = read_u16(reader)?;
		let layer_info_size = read_u16(reader)?;
		skip(reader, i64::from(header_size) - CONTAINER_HEADER_FIXED_SIZE)?;

		let header = Self {
			version,
			header_size,
			width,
			height,
			dpi,
			layer_count,
			selected_layer,
			layer_info_size,
		};
		debug!("{header}");

		Ok(header)
	}

	/// Returns the layout version.
	pub fn version(&self) -> Version {
		self.version
	}

	/// Returns the size of the header fields following the size field itself.
	pub fn header_size(&self) -> u16 {
		self.header_size
	}

	/// Returns the canvas width in pixels.
	pub fn width(&self) -> u16 {
		self.width
	}

	/// Returns the canvas height in pixels.
	pub fn height(&self) -> u16 {
		self.height
	}

	/// Returns the resolution in dots per inch.
	pub fn dpi(&self) -> u16 {
		self.dpi
	}

	/// Returns the number of layer records.
	pub fn layer_count(&self) -> u16 {
		self.layer_count
	}

	/// Returns the index of the layer selected when the file was saved.
	pub fn selected_layer(&self) -> u16 {
		self.selected_layer
	}

	/// Returns the on-disk size of one layer record.
	pub fn layer_info_size(&self) -> u16 {
		self.layer_info_size
	}
}

impl Display for Header {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			".ADW Header:\n\
			- Version: {}\n\
			- Size: {}x{} pixels\n\
			- DPI: {}\n\
			- Layer Records: {} ({} bytes each)\n\
			- Selected Layer: {}",
			self.version,
			self.width,
			self.height,
			self.dpi,
			self.layer_count,
			self.layer_info_size,
			self.selected_layer,
		)
	}
}
