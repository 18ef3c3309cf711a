//! `.ADW` layered animation container support.
//!
//! An `.ADW` file stores a multi-layer, multi-frame sprite as a list of layer
//! records. Each record carries a bounding rectangle, a single fill color and a
//! set of 64x64 alpha tiles; the color is combined with the decoded alpha to
//! produce the record's image.
//!
//! # File Structure
//!
//! All integers are little-endian.
//!
//! ```text
//! Offset  Size  Field
//! ------  ----  ------------------------------------------
//! 0x00    7     magic "AZDWDAT"
//! 0x07    1     version selector (only 1 is supported)
//! 0x0C    4     length L of a header block that is skipped
//! 0x10+L  2     header size S (bytes after this field)
//!         2     width
//!         2     height
//!         2     dpi
//!         2     layer record count
//!         2     selected layer index
//!         2     layer record size R
//!         S-12  padding
//! ```
//!
//! ## Layer Record (R bytes, followed by its tiles)
//!
//! ```text
//! Size  Field
//! ----  ------------------------------------------
//! 16    x0, y0, x1, y1 (i32 corners)
//! 4     tile count
//! 50    name, 25 UTF-16LE units
//! 1     alpha
//! 4     fill color, B G R A
//! 1     flags
//! 1     category (0 Normal, 1 Secondary, 2 Background, 3 Hidden, others unknown)
//! 2     hold count
//! R-79  padding
//! ```
//!
//! ## Tile
//!
//! ```text
//! Size  Field
//! ----  ------------------------------------------
//! 2     tile x
//! 2     tile y
//! 2     payload size N (1..=4096)
//! N     4096 raw alpha bytes if N == 4096, a zlib stream otherwise
//! ```
//!
//! # Animation
//!
//! With [`LoadOptions::animation`] off, every record becomes its own layer
//! with a single cel on frame 0. With it on, the record categories rebuild a
//! timeline: Normal records advance the frame counter by their hold count,
//! Secondary and Background records overlay the following frame group, and
//! Hidden records leave an empty frame. Records of an unknown category are
//! read and dropped. Held frames are linked cels sharing
//! the image of their primary cel.
//!
//! # Examples
//!
//! ```no_run
//! use adw_types::file::adw::{File, LoadOptions};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let adw = File::open("walk.adw", &LoadOptions::animated())?;
//! println!("{}", adw.header());
//!
//! for layer in adw.sprite().layers() {
//!     println!("{}: {} cels", layer.name(), layer.cel_count());
//! }
//! # Ok(())
//! # }
//! ```

mod assemble;
mod bytes;
mod decode;
mod header;
mod options;
mod record;
mod router;
mod state;
mod tile;
mod timeline;

pub mod constants;


use std::io::{Cursor, Read, Seek};

pub use assemble::{check_tile_index, paint_tile};
pub use header::{Header, Version};
pub use options::{LoadOptions, NoProgress, Progress};
pub use record::{Category, LayerRecord, Rect, bgra_to_rgba, decode_name};
pub use tile::TileDecoder;

use crate::{file::AdwError, sprite::Sprite};

/// A decoded `.ADW` container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
	header: Header,
	sprite: Sprite,
}

impl File {
	/// Opens and decodes the container at `path`.
	pub fn open(path: impl AsRef<std::path::Path>, options: &LoadOptions) -> Result<Self, AdwError> {
		let data = std::fs::read(path)?;
		Self::from_bytes(&data, options)
	}

	/// Decodes a container held in memory.
	pub fn from_bytes(data: &[u8], options: &LoadOptions) -> Result<Self, AdwError> {
		let mut cursor = Cursor::new(data);
		Self::from_reader(&mut cursor, options)
	}

	/// Decodes a container from any seekable reader.
	pub fn from_reader<R: Read + Seek>(reader: &mut R, options: &LoadOptions) -> Result<Self, AdwError> {
		Self::from_reader_with_progress(reader, options, &mut NoProgress)
	}

	/// Decodes a container, reporting progress after each layer record.
	///
	/// # Errors
	///
	/// Returns an error if:
	/// - The magic or version selector is not recognised
	/// - The source ends early
	/// - A layer rectangle is too large to allocate
	/// - A tile index lies outside its record's tile grid
	/// - A tile payload size is 0 or above 4096
	/// - A compressed tile does not inflate to exactly 4096 bytes
	///
	/// No sprite is returned on error.
	pub fn from_reader_with_progress<R, P>(
		reader: &mut R,
		options: &LoadOptions,
		progress: &mut P,
	) -> Result<Self, AdwError>
	where
		R: Read + Seek,
		P: Progress + ?Sized,
	{
		let header = Header::from_reader(reader)?;
		let sprite = match header.version() {
			Version::V2 => decode::decode(reader, &header, options, progress)?,
		};

		Ok(Self {
			header,
			sprite,
		})
	}

	/// Returns the container header.
	pub fn header(&self) -> &Header {
		&self.header
	}

	/// Returns the decoded sprite.
	pub fn sprite(&self) -> &Sprite {
		&self.sprite
	}

	/// Consumes the file, handing over the sprite.
	pub fn into_sprite(self) -> Sprite {
		self.sprite
	}
}

impl std::fmt::Display for File {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "ADW File ({}): {}", self.header.version(), self.sprite)
	}
}
