//! Preference persistence for sketchbind.
//!
//! The workflow stores exactly one value outside the document: the
//! tri-state delete-sketch preference. It lives in the `[macros]` table
//! of a user-scope `preferences.toml` so it survives across documents
//! and sessions, and so other macro preferences can share the file.

mod atomic_write;
mod store;

pub use store::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore, StoreError};

use std::path::PathBuf;

/// Location of the user-scope preference file, when a config directory
/// can be resolved for this user.
#[must_use]
pub fn preferences_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("sketchbind").join("preferences.toml"))
}
