//! Prelude module for `adw_internal`.
//!
//! This module provides a convenient way to import commonly used types and traits.
//!
//! # Examples
//!
//! ```rust
//! use adw_internal::prelude::*;
//!
//! let options = LoadOptions::animated();
//! let mut sprite = Sprite::new(64, 64);
//! let index = sprite.add_layer(Layer::new("ink", LayerFlags::ANIMATED));
//! assert_eq!(sprite.layer(index).map(Layer::name), Some("ink"));
//! ```

// Re-export everything from adw_types::prelude
#[doc(inline)]
pub use adw_types::prelude::*;

// Re-export the entire adw_types module for advanced usage
#[doc(inline)]
pub use adw_types;
