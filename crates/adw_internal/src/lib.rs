//! This module is separated into its own crate to keep the public facade of `adw-rs` thin, and should not be used directly.

/// `use adw_rs::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export adw_types for convenience
pub use adw_types;

// Re-export commonly used types at crate root
pub use adw_types::file::{AdwError, AdwFile, AdwHeader, LoadOptions};
pub use adw_types::sprite::Sprite;
