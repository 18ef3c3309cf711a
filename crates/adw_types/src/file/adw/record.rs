//! Layer record metadata.

use std::{
	fmt::Display,
	io::{Read, Seek},
};

use log::warn;

use super::bytes::{read_i32, read_u8, read_u16, read_u32, skip};
use super::constants::{LAYER_RECORD_FIXED_SIZE, NAME_BYTES, NAME_UNITS, TILE_SIZE};
use crate::file::AdwError;

/// Role of a layer record in the animation timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
	/// Main content; drives the frame counter (`0`)
	Normal,
	/// Overlay drawn on top of the following main frame group (`1`)
	Secondary,
	/// Backdrop held until the next background group starts (`2`)
	Background,
	/// Gap frame in animation mode, invisible layer in still mode (`3`)
	Hidden,
	/// Any other byte: a visible layer in still mode, ignored in animation mode
	Unknown(u8),
}

impl Category {
	/// Converts a raw category byte.
	///
	/// Values above 3 are kept as [`Category::Unknown`].
	pub fn from_u8(value: u8) -> Self {
		match value {
			0 => Self::Normal,
			1 => Self::Secondary,
			2 => Self::Background,
			3 => Self::Hidden,
			_ => {
				warn!("Unknown layer category {value}");
				Self::Unknown(value)
			}
		}
	}

	/// Returns the raw category byte.
	pub fn to_u8(self) -> u8 {
		match self {
			Self::Normal => 0,
			Self::Secondary => 1,
			Self::Background => 2,
			Self::Hidden => 3,
			Self::Unknown(value) => value,
		}
	}
}

impl Display for Category {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Normal => write!(f, "Normal"),
			Self::Secondary => write!(f, "Secondary"),
			Self::Background => write!(f, "Background"),
			Self::Hidden => write!(f, "Hidden"),
			Self::Unknown(value) => write!(f, "Unknown({value})"),
		}
	}
}

/// Bounding rectangle of a layer record, in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
	/// Left edge
	pub x: i32,
	/// Top edge
	pub y: i32,
	/// Width in pixels
	pub width: u32,
	/// Height in pixels
	pub height: u32,
}

impl Rect {
	/// Builds a rectangle from two corners.
	///
	/// Inverted corners produce an empty extent.
	pub fn from_corners(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
		let width = x1.saturating_sub(x0);
		let height = y1.saturating_sub(y0);
		if width < 0 || height < 0 {
			warn!("Inverted layer rectangle ({x0}, {y0})-({x1}, {y1}), clamping to empty");
		}

		Self {
			x: x0,
			y: y0,
			width: width.max(0) as u32,
			height: height.max(0) as u32,
		}
	}

	/// Returns the number of tile columns covering the rectangle.
	pub fn tile_columns(&self) -> u32 {
		self.width.div_ceil(TILE_SIZE)
	}

	/// Returns the number of tile rows covering the rectangle.
	pub fn tile_rows(&self) -> u32 {
		self.height.div_ceil(TILE_SIZE)
	}
}

/// One layer record, as read before its tiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerRecord {
	rect: Rect,
	tile_count: u32,
	raw_name: [u8; NAME_BYTES],
	name: String,
	alpha: u8,
	color: u32,
	flags: u8,
	category: Category,
	hold_count: u16,
}

impl LayerRecord {
	/// Reads a record and skips its trailing bytes, leaving `reader` at the first tile.
	///
	/// `record_size` is the on-disk record size from the container header.
	pub fn from_reader<R: Read + Seek>(reader: &mut R, record_size: u16) -> Result<Self, AdwError> {
		let x0 = read_i32(reader)?;
		let y0 = read_i32(reader)?;
		let x1 = read_i32(reader)?;
		let y1 = read_i32(reader)?;
		let rect = Rect::from_corners(x0, y0, x1, y1);
		let tile_count = read_u32(reader)?;

		let mut raw_name = [0u8; NAME_BYTES];
		reader.read_exact(&mut raw_name)?;

		let alpha = read_u8(reader)?;
		let color = bgra_to_rgba(read_u32(reader)?);
		let flags = read_u8(reader)?;
		let category = Category::from_u8(read_u8(reader)?);
		let hold_count = read_u16(reader)?;

		skip(reader, i64::from(record_size) - LAYER_RECORD_FIXED_SIZE)?;

		Ok(Self {
			rect,
			tile_count,
			name: decode_name(&raw_name),
			raw_name,
			alpha,
			color,
			flags,
			category,
			hold_count,
		})
	}

	/// Returns the bounding rectangle.
	pub fn rect(&self) -> Rect {
		self.rect
	}

	/// Returns the number of tiles that follow the record.
	pub fn tile_count(&self) -> u32 {
		self.tile_count
	}

	/// Returns the display name, reduced to printable ASCII.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns the raw name field.
	pub fn raw_name(&self) -> &[u8; NAME_BYTES] {
		&self.raw_name
	}

	/// Returns the layer opacity byte.
	pub fn alpha(&self) -> u8 {
		self.alpha
	}

	/// Returns the fill color as packed RGBA (red in the low byte).
	pub fn color(&self) -> u32 {
		self.color
	}

	/// Returns the raw flag byte.
	pub fn flags(&self) -> u8 {
		self.flags
	}

	/// Returns the record category.
	pub fn category(&self) -> Category {
		self.category
	}

	/// Returns how many frames the record's image is held for.
	pub fn hold_count(&self) -> u16 {
		self.hold_count
	}
}

impl Display for LayerRecord {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"\"{}\" {} at ({}, {}) {}x{}, {} tiles, hold {}",
			self.name,
			self.category,
			self.rect.x,
			self.rect.y,
			self.rect.width,
			self.rect.height,
			self.tile_count,
			self.hold_count,
		)
	}
}

/// Swaps the red and blue channels of a color read as `B, G, R, A` bytes.
#[inline]
pub fn bgra_to_rgba(color: u32) -> u32 {
	(color & 0xFF00_FF00) | ((color & 0xFF) << 16) | ((color & 0xFF_0000) >> 16)
}

/// Reduces a raw UTF-16LE name to a printable ASCII display string.
///
/// Decoding stops at the first NUL unit or after 24 units. Units outside
/// `0x20..=0x7D` become `.`; this is a display label, not a Unicode decode.
pub fn decode_name(raw: &[u8; NAME_BYTES]) -> String {
	raw.chunks_exact(2)
		.take(NAME_UNITS)
		.map(|unit| u16::from_le_bytes([unit[0], unit[1]]))
		.take_while(|&unit| unit != 0)
		.map(|unit| match unit {
			0x20..=0x7D => unit as u8 as char,
			_ => '.',
		})
		.collect()
}
