//! Little-endian read helpers over `Read`/`Seek` sources.

use std::io::{Read, Seek, SeekFrom};

use crate::file::AdwError;

pub(super) fn read_u8<R: Read>(reader: &mut R) -> Result<u8, AdwError> {
	let mut buffer = [0u8; 1];
	reader.read_exact(&mut buffer)?;
	Ok(buffer[0])
}

pub(super) fn read_u16<R: Read>(reader: &mut R) -> Result<u16, AdwError> {
	let mut buffer = [0u8; 2];
	reader.read_exact(&mut buffer)?;
	Ok(u16::from_le_bytes(buffer))
}

pub(super) fn read_u32<R: Read>(reader: &mut R) -> Result<u32, AdwError> {
	let mut buffer = [0u8; 4];
	reader.read_exact(&mut buffer)?;
	Ok(u32::from_le_bytes(buffer))
}

pub(super) fn read_i32<R: Read>(reader: &mut R) -> Result<i32, AdwError> {
	let mut buffer = [0u8; 4];
	reader.read_exact(&mut buffer)?;
	Ok(i32::from_le_bytes(buffer))
}

/// Moves the cursor `offset` bytes relative to the current position.
pub(super) fn skip<R: Seek>(reader: &mut R, offset: i64) -> Result<(), AdwError> {
	if offset != 0 {
		reader.seek(SeekFrom::Current(offset))?;
	}
	Ok(())
}
