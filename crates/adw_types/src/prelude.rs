//! Prelude module for `adw_types`.
//!
//! This module provides a convenient way to import commonly used types, traits, and constants.
//!
//! # Examples
//!
//! ```no_run
//! use adw_types::prelude::*;
//!
//! let options = LoadOptions::animated();
//! let sprite = Sprite::new(64, 64);
//! ```

// File module types
#[doc(inline)]
pub use crate::file::{
	AdwError,
	// ADW types
	AdwFile,
	AdwHeader,
	Category,
	LoadOptions,
	NoProgress,
	Progress,
};

// Document model
#[doc(inline)]
pub use crate::sprite::{Cel, CelKind, Image, Layer, LayerFlags, Sprite};

// Re-export the file module for advanced usage
#[doc(inline)]
pub use crate::file;
