//! Constants used in `.ADW` containers

/// Magic bytes at the start of every container
pub const MAGIC: [u8; 7] = *b"AZDWDAT";

/// Offset of the 32-bit length of the leading header block
pub const HEADER_BLOCK_LENGTH_OFFSET: u64 = 12;

/// Bytes of the container header counted by its size field
pub const CONTAINER_HEADER_FIXED_SIZE: i64 = 12;

/// Bytes of a layer record consumed by the record reader
pub const LAYER_RECORD_FIXED_SIZE: i64 = 79;

/// Size of the raw layer name field (25 UTF-16 code units)
pub const NAME_BYTES: usize = 50;

/// Number of name code units considered when decoding a layer name
pub const NAME_UNITS: usize = 24;

/// Tile edge length in pixels
pub const TILE_SIZE: u32 = 64;

/// Number of alpha bytes in one tile (64 x 64)
pub const TILE_AREA: usize = (TILE_SIZE * TILE_SIZE) as usize;
