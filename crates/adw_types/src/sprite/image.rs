//! RGBA pixel buffers owned by cels.

use std::fmt::Display;

/// Packs four channels into the `u32` layout used by [`Image`].
#[inline]
pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
	(r as u32) | ((g as u32) << 8) | ((b as u32) << 16) | ((a as u32) << 24)
}

/// Splits a packed pixel into `[r, g, b, a]`.
#[inline]
pub const fn channels(pixel: u32) -> [u8; 4] {
	pixel.to_le_bytes()
}

/// A `width` x `height` RGBA image.
///
/// Pixels are stored row-major as packed `u32` values with red in the low byte
/// and alpha in the high byte, so a fill color can be combined with an alpha
/// plane as `color | (alpha << 24)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Image {
	width: u32,
	height: u32,
	pixels: Vec<u32>,
}

impl Image {
	/// Creates a fully transparent image.
	pub fn new(width: u32, height: u32) -> Self {
		Self {
			width,
			height,
			pixels: vec![0; width as usize * height as usize],
		}
	}

	/// Creates a fully transparent image, or `None` if the pixel buffer
	/// cannot be allocated.
	pub fn try_new(width: u32, height: u32) -> Option<Self> {
		let len = (width as usize).checked_mul(height as usize)?;
		let mut pixels = Vec::new();
		pixels.try_reserve_exact(len).ok()?;
		pixels.resize(len, 0);

		Some(Self {
			width,
			height,
			pixels,
		})
	}

	/// Returns the width in pixels.
	pub fn width(&self) -> u32 {
		self.width
	}

	/// Returns the height in pixels.
	pub fn height(&self) -> u32 {
		self.height
	}

	/// Returns all pixels, row-major.
	pub fn pixels(&self) -> &[u32] {
		&self.pixels
	}

	/// Returns the packed pixel at `(x, y)`, or `None` outside the image.
	pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
		if x >= self.width || y >= self.height {
			return None;
		}
		Some(self.pixels[y as usize * self.width as usize + x as usize])
	}

	/// Writes a packed pixel at `(x, y)`.
	///
	/// Writes outside the image are dropped.
	pub fn put_pixel(&mut self, x: u32, y: u32, value: u32) {
		if x >= self.width || y >= self.height {
			return;
		}
		self.pixels[y as usize * self.width as usize + x as usize] = value;
	}

	/// Converts the image to a flat `RGBA8` byte buffer.
	pub fn to_rgba8(&self) -> Vec<u8> {
		self.pixels.iter().flat_map(|&p| channels(p)).collect()
	}

	/// Blends `src` over this image with its top-left corner at `(x, y)`.
	///
	/// Parts of `src` that fall outside this image are clipped.
	pub fn blend_from(&mut self, src: &Image, x: i32, y: i32) {
		for sy in 0..src.height {
			let dy = i64::from(y) + i64::from(sy);
			if dy < 0 || dy >= i64::from(self.height) {
				continue;
			}
			for sx in 0..src.width {
				let dx = i64::from(x) + i64::from(sx);
				if dx < 0 || dx >= i64::from(self.width) {
					continue;
				}
				let index = dy as usize * self.width as usize + dx as usize;
				let top = src.pixels[sy as usize * src.width as usize + sx as usize];
				self.pixels[index] = blend_over(self.pixels[index], top);
			}
		}
	}
}

impl Display for Image {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}x{} RGBA", self.width, self.height)
	}
}

/// Source-over compositing of two straight-alpha pixels.
fn blend_over(bottom: u32, top: u32) -> u32 {
	let [tr, tg, tb, ta] = channels(top);
	if ta == 0xFF {
		return top;
	}
	if ta == 0 {
		return bottom;
	}
	let [br, bg, bb, ba] = channels(bottom);

	let ta = u32::from(ta);
	let ba = u32::from(ba);
	// out_a = ta + ba * (1 - ta), all scaled by 255
	let out_a = ta * 255 + ba * (255 - ta);
	if out_a == 0 {
		return 0;
	}
	let mix = |t: u8, b: u8| -> u8 {
		let value = (u32::from(t) * ta * 255 + u32::from(b) * ba * (255 - ta)) / out_a;
		value.min(255) as u8
	};

	rgba(mix(tr, br), mix(tg, bg), mix(tb, bb), (out_a / 255) as u8)
}
