//! Cross-platform utilities shared by the store and configuration layers.
//!
//! - [`fs`] - directory creation and atomic whole-file writes
//! - [`platform`] - `~`/environment expansion for configured paths

pub mod fs;
pub mod platform;

pub use fs::{atomic_write, ensure_dir};
pub use platform::resolve_path;
