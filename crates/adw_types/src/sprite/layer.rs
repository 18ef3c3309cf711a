//! Layers and their flag byte.

use std::collections::BTreeMap;

use super::Cel;

/// Raw layer flag byte.
///
/// The loader only ever produces three values:
///
/// | Value  | Meaning                                   |
/// |--------|-------------------------------------------|
/// | `0x03` | layer created in still mode               |
/// | `0x13` | layer created in animation mode           |
/// | `0x02` | still-mode layer from a hidden record     |
///
/// The byte is kept as-is. The bit accessors below use the host document
/// model's names for `0x01`, `0x02` and `0x10`; the container itself assigns
/// them no meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LayerFlags(u8);

impl LayerFlags {
	const VISIBLE: u8 = 0x01;
	const EDITABLE: u8 = 0x02;
	const CONTINUOUS: u8 = 0x10;

	/// Flags of a layer created in still mode.
	pub const STILL: Self = Self(0x03);

	/// Flags of a layer created in animation mode.
	pub const ANIMATED: Self = Self(0x13);

	/// Flags of a still-mode layer built from a hidden record.
	pub const HIDDEN: Self = Self(0x02);

	/// Wraps a raw flag byte.
	pub const fn from_bits(bits: u8) -> Self {
		Self(bits)
	}

	/// Returns the raw flag byte.
	pub const fn bits(self) -> u8 {
		self.0
	}

	/// Host-model "visible" bit (`0x01`).
	pub const fn is_visible(self) -> bool {
		self.0 & Self::VISIBLE != 0
	}

	/// Host-model "editable" bit (`0x02`).
	pub const fn is_editable(self) -> bool {
		self.0 & Self::EDITABLE != 0
	}

	/// Host-model "continuous" bit (`0x10`), set on animation-mode layers.
	pub const fn is_continuous(self) -> bool {
		self.0 & Self::CONTINUOUS != 0
	}
}

/// A named, ordered container of cels, at most one per frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
	name: String,
	flags: LayerFlags,
	cels: BTreeMap<u32, Cel>,
}

impl Layer {
	/// Creates an empty layer.
	pub fn new(name: impl Into<String>, flags: LayerFlags) -> Self {
		Self {
			name: name.into(),
			flags,
			cels: BTreeMap::new(),
		}
	}

	/// Returns the layer name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns the layer flags.
	pub fn flags(&self) -> LayerFlags {
		self.flags
	}

	/// Replaces the layer flags.
	pub fn set_flags(&mut self, flags: LayerFlags) {
		self.flags = flags;
	}

	/// Returns `true` if the layer is shown.
	pub fn is_visible(&self) -> bool {
		self.flags.is_visible()
	}

	/// Adds a cel, replacing any cel already at the same frame.
	pub fn add_cel(&mut self, cel: Cel) -> Option<Cel> {
		self.cels.insert(cel.frame(), cel)
	}

	/// Removes and returns the cel at `frame`.
	pub fn remove_cel(&mut self, frame: u32) -> Option<Cel> {
		self.cels.remove(&frame)
	}

	/// Returns the cel at `frame`.
	pub fn cel(&self, frame: u32) -> Option<&Cel> {
		self.cels.get(&frame)
	}

	/// Iterates over the cels in frame order.
	pub fn cels(&self) -> impl Iterator<Item = &Cel> {
		self.cels.values()
	}

	/// Returns the number of cels.
	pub fn cel_count(&self) -> usize {
		self.cels.len()
	}
}
