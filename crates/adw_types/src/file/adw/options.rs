//! Load-time settings and progress reporting.

use serde::{Deserialize, Serialize};

/// Settings chosen before a container is loaded.
///
/// # Examples
///
/// ```
/// use adw_types::file::adw::LoadOptions;
///
/// // One layer per record, single frame
/// let options = LoadOptions::default();
/// assert!(!options.animation);
///
/// // Rebuild the animation timeline from the record categories
/// let options = LoadOptions::animated();
/// assert!(options.animation);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadOptions {
	/// Build a multi-frame animation instead of a single frame
	pub animation: bool,
}

impl LoadOptions {
	/// Options for an animation load.
	pub fn animated() -> Self {
		Self {
			animation: true,
		}
	}

	/// Options for a single-frame load with one layer per record.
	pub fn still() -> Self {
		Self {
			animation: false,
		}
	}
}

/// Receives coarse progress once per layer record.
///
/// The value is `records_processed / total_records` in integer arithmetic, so
/// it stays 0 until the last record.
pub trait Progress {
	/// Called after each layer record.
	fn set_progress(&mut self, progress: u16);
}

/// Discards progress reports.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl Progress for NoProgress {
	fn set_progress(&mut self, _progress: u16) {}
}

impl<F: FnMut(u16)> Progress for F {
	fn set_progress(&mut self, progress: u16) {
		self(progress);
	}
}
