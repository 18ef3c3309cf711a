//! File type support for `adw-rs` project.

mod error;

pub mod adw;

// Re-export unified error type
pub use error::AdwError;

// Re-export main file types
pub use adw::{Category, File as AdwFile, Header as AdwHeader, LoadOptions, NoProgress, Progress, Version};
