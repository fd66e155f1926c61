//! The delete-sketch preference store.
//!
//! `get` is deliberately infallible: a missing file, a malformed file,
//! or an unknown token all read as `Ask`. The only destructive action
//! in the workflow is gated on this value, so anything unreadable must
//! degrade to asking the user, never to deleting.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use toml_edit::DocumentMut;
use tracing::{debug, warn};

use sketchbind_types::DeletePreference;

use crate::atomic_write::atomic_write;
use crate::preferences_path;

const MACROS_TABLE: &str = "macros";
const DELETE_SKETCH_KEY: &str = "delete_sketch";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no user config directory available for preferences")]
    NoConfigDir,
    #[error("failed to write preference file: {0}")]
    Io(#[from] io::Error),
}

/// User-scope persistence for the delete-sketch preference.
///
/// Injected into the deletion decision so it can be faked in tests.
pub trait PreferenceStore {
    /// Read the persisted preference. Absent and unreadable values both
    /// read as [`DeletePreference::Ask`].
    fn get(&self) -> DeletePreference;

    /// Persist a preference. The workflow only ever writes `Always` or
    /// `Never`; `Ask` is represented by leaving the key untouched.
    fn set(&mut self, preference: DeletePreference) -> Result<(), StoreError>;
}

#[derive(Debug, Default, Deserialize)]
struct PreferenceFile {
    #[serde(default)]
    macros: MacroPreferences,
}

#[derive(Debug, Default, Deserialize)]
struct MacroPreferences {
    delete_sketch: Option<String>,
}

/// TOML-file-backed store at a user-scope path.
///
/// Writes go through [`toml_edit`] so any other keys a host keeps in
/// the same preference file survive a rewrite untouched.
#[derive(Debug)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Open the store at the default user-scope location.
    pub fn open_default() -> Result<Self, StoreError> {
        preferences_path()
            .map(Self::new)
            .ok_or(StoreError::NoConfigDir)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_token(&self) -> Option<String> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Preference file absent");
                return None;
            }
            Err(err) => {
                warn!(path = %self.path.display(), "Failed to read preference file: {err}");
                return None;
            }
        };

        match toml::from_str::<PreferenceFile>(&text) {
            Ok(file) => file.macros.delete_sketch,
            Err(err) => {
                warn!(path = %self.path.display(), "Malformed preference file: {err}");
                None
            }
        }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self) -> DeletePreference {
        let Some(token) = self.read_token() else {
            return DeletePreference::Ask;
        };
        DeletePreference::parse(&token).unwrap_or_else(|| {
            warn!(token, "Unknown delete_sketch token, treating as absent");
            DeletePreference::Ask
        })
    }

    fn set(&mut self, preference: DeletePreference) -> Result<(), StoreError> {
        let mut doc = match fs::read_to_string(&self.path) {
            Ok(text) => text.parse::<DocumentMut>().unwrap_or_else(|err| {
                warn!(path = %self.path.display(), "Replacing malformed preference file: {err}");
                DocumentMut::new()
            }),
            Err(_) => DocumentMut::new(),
        };

        doc[MACROS_TABLE][DELETE_SKETCH_KEY] = toml_edit::value(preference.as_str());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        atomic_write(&self.path, doc.to_string().as_bytes())?;
        debug!(path = %self.path.display(), preference = %preference, "Persisted delete_sketch preference");
        Ok(())
    }
}

/// In-memory store for tests and for hosts that manage their own
/// persistence. Holds the raw token so defensive parsing behaves
/// exactly like the file backend.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    token: Option<String>,
}

impl MemoryPreferenceStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a raw stored token, legal or not.
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    #[must_use]
    pub fn with_preference(preference: DeletePreference) -> Self {
        Self::with_token(preference.as_str())
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self) -> DeletePreference {
        self.token
            .as_deref()
            .and_then(DeletePreference::parse)
            .unwrap_or(DeletePreference::Ask)
    }

    fn set(&mut self, preference: DeletePreference) -> Result<(), StoreError> {
        self.token = Some(preference.as_str().to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> FilePreferenceStore {
        FilePreferenceStore::new(dir.path().join("prefs").join("preferences.toml"))
    }

    #[test]
    fn absent_file_reads_ask() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(&dir);
        assert_eq!(store.get(), DeletePreference::Ask);
    }

    #[test]
    fn set_then_get_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut store = store_in(&dir);

        store.set(DeletePreference::Always).expect("set");
        assert_eq!(store.get(), DeletePreference::Always);

        store.set(DeletePreference::Never).expect("set");
        assert_eq!(store.get(), DeletePreference::Never);
    }

    #[test]
    fn unknown_token_reads_ask() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(&dir);
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "[macros]\ndelete_sketch = \"Sometimes\"\n").unwrap();

        assert_eq!(store.get(), DeletePreference::Ask);
    }

    #[test]
    fn malformed_file_reads_ask() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(&dir);
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "not toml [[[").unwrap();

        assert_eq!(store.get(), DeletePreference::Ask);
    }

    #[test]
    fn set_preserves_unrelated_keys() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut store = store_in(&dir);
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(
            store.path(),
            "[macros]\nother_macro = \"keep me\"\n\n[host]\ntheme = \"dark\"\n",
        )
        .unwrap();

        store.set(DeletePreference::Never).expect("set");

        let text = fs::read_to_string(store.path()).unwrap();
        assert!(text.contains("other_macro = \"keep me\""));
        assert!(text.contains("theme = \"dark\""));
        assert_eq!(store.get(), DeletePreference::Never);
    }

    #[test]
    fn memory_store_defaults_to_ask() {
        assert_eq!(MemoryPreferenceStore::new().get(), DeletePreference::Ask);
        assert_eq!(
            MemoryPreferenceStore::with_token("garbage").get(),
            DeletePreference::Ask
        );
    }

    #[test]
    fn memory_store_round_trips() {
        let mut store = MemoryPreferenceStore::new();
        store.set(DeletePreference::Always).expect("set");
        assert_eq!(store.get(), DeletePreference::Always);
    }
}
