//! Error types for container parsing.

use thiserror::Error;

/// Errors that can occur while loading an `.ADW` container.
///
/// Every variant is terminal: a load that hits any of them returns no sprite.
#[derive(Debug, Error)]
pub enum AdwError {
	/// Short or failed read/seek on the underlying source
	#[error(transparent)]
	IOError(#[from] std::io::Error),

	/// The file does not start with `AZDWDAT`
	#[error("Invalid magic: {0:02X?}")]
	InvalidMagic([u8; 7]),

	/// The version selector byte is not recognised
	#[error("Unsupported version selector: {0}")]
	UnsupportedVersion(u8),

	/// A tile lies outside the tile grid of its layer record
	#[error("Tile ({x}, {y}) outside the {columns}x{rows} tile grid")]
	InvalidTileIndex {
		/// Tile column
		x: u16,
		/// Tile row
		y: u16,
		/// Number of tile columns in the record
		columns: u32,
		/// Number of tile rows in the record
		rows: u32,
	},

	/// A layer rectangle is too large to allocate
	#[error("Layer image of {width}x{height} pixels cannot be allocated")]
	ImageTooLarge {
		/// Rectangle width
		width: u32,
		/// Rectangle height
		height: u32,
	},

	/// A tile payload size is 0 or larger than one uncompressed tile
	#[error("Invalid tile payload size: {0} bytes")]
	InvalidTileSize(u16),

	/// A compressed tile did not inflate to exactly one tile
	#[error("Tile decompression failed: {0}")]
	DecompressionError(String),
}

impl AdwError {
	/// Returns `true` for errors raised while checking the magic or version.
	pub fn is_malformed_header(&self) -> bool {
		matches!(self, Self::InvalidMagic(_) | Self::UnsupportedVersion(_))
	}
}
