//! `adw-rs` loads layered, tiled `.ADW` animation containers into a sprite
//! document of layers, cels and frames.

pub use adw_internal::*;
