//! This crate provides the document model and file format support for the `adw-rs` project.
//!
//! # File Formats
//!
//! - **ADW**: Layered animation containers storing zlib-compressed 64x64 alpha
//!   tiles per layer record, with an optional animation timeline
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```no_run
//! use adw_types::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let adw = AdwFile::open("walk.adw", &LoadOptions::animated())?;
//! let sprite: &Sprite = adw.sprite();
//! println!("{} frames", sprite.total_frames());
//! # Ok(())
//! # }
//! ```
//!
//! Or use explicit paths:
//!
//! ```no_run
//! use adw_types::file::adw::{File, LoadOptions};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let adw = File::open("walk.adw", &LoadOptions::default())?;
//! # Ok(())
//! # }
//! ```

pub mod file;
pub mod sprite;

/// `use adw_types::prelude::*;` to import commonly used items.
pub mod prelude;
