//! Cels: images placed on a layer at a given frame.

use std::rc::Rc;

use super::Image;

/// Whether a cel owns its image or borrows the image of an earlier cel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CelKind {
	/// Carries a freshly decoded image.
	Primary,

	/// Repeats the image of the primary cel at `source_frame` on the same layer.
	Linked {
		/// Frame of the primary cel whose image is shared
		source_frame: u32,
	},
}

/// An image bound to a frame index and a canvas position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cel {
	frame: u32,
	x: i32,
	y: i32,
	image: Rc<Image>,
	kind: CelKind,
}

impl Cel {
	/// Creates a primary cel owning `image`.
	pub fn new(frame: u32, x: i32, y: i32, image: Image) -> Self {
		Self {
			frame,
			x,
			y,
			image: Rc::new(image),
			kind: CelKind::Primary,
		}
	}

	/// Creates a cel at `frame` sharing this cel's image and position.
	///
	/// Linking a linked cel points back to the primary frame.
	pub fn link(&self, frame: u32) -> Self {
		let source_frame = match self.kind {
			CelKind::Primary => self.frame,
			CelKind::Linked {
				source_frame,
			} => source_frame,
		};

		Self {
			frame,
			x: self.x,
			y: self.y,
			image: Rc::clone(&self.image),
			kind: CelKind::Linked {
				source_frame,
			},
		}
	}

	/// Returns the frame index.
	pub fn frame(&self) -> u32 {
		self.frame
	}

	/// Returns the position of the image's top-left corner on the canvas.
	pub fn position(&self) -> (i32, i32) {
		(self.x, self.y)
	}

	/// Returns the image.
	pub fn image(&self) -> &Image {
		&self.image
	}

	/// Returns the shared handle to the image.
	pub fn image_rc(&self) -> &Rc<Image> {
		&self.image
	}

	/// Returns whether this cel owns or links its image.
	pub fn kind(&self) -> CelKind {
		self.kind
	}

	/// Returns `true` for linked cels.
	pub fn is_link(&self) -> bool {
		matches!(self.kind, CelKind::Linked { .. })
	}
}
