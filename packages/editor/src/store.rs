//! # Durable state
//!
//! The builder mirrors its state into a key/value store after every
//! change. Each key holds one whole JSON value; writes always replace the
//! full value.
//!
//! Backends:
//! - [`MemoryStore`]: in-process map, for tests and throwaway sessions
//! - [`DirectoryStore`]: one `<key>.json` file per key
//!
//! The browser bindings add a backend over the page's `localStorage`.

use crate::StoreError;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Version of the stored value shapes.
pub const SCHEMA_VERSION: u32 = 1;

/// Fixed, namespaced storage keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    Sections,
    SidebarPinned,
    SidebarOpen,
    PreviewMode,
    EditingSection,
    SchemaVersion,
}

impl StorageKey {
    pub const ALL: [StorageKey; 6] = [
        StorageKey::Sections,
        StorageKey::SidebarPinned,
        StorageKey::SidebarOpen,
        StorageKey::PreviewMode,
        StorageKey::EditingSection,
        StorageKey::SchemaVersion,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::Sections => "websiteBuilder_sections",
            StorageKey::SidebarPinned => "websiteBuilder_sidebarPinned",
            StorageKey::SidebarOpen => "websiteBuilder_sidebarOpen",
            StorageKey::PreviewMode => "websiteBuilder_previewMode",
            StorageKey::EditingSection => "websiteBuilder_editingSection",
            StorageKey::SchemaVersion => "websiteBuilder_schemaVersion",
        }
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key/value backend for builder state.
pub trait StateStore {
    /// Raw stored text for a key, if any.
    fn read(&self, key: StorageKey) -> Result<Option<String>, StoreError>;

    /// Replace the value stored under a key.
    fn write(&mut self, key: StorageKey, value: &str) -> Result<(), StoreError>;

    /// Erase a key. Erasing an absent key is not an error.
    fn remove(&mut self, key: StorageKey) -> Result<(), StoreError>;
}

/// Read and parse one key. Any failure (backend or JSON) is logged and
/// reported as `None` so callers fall back to their default.
pub fn read_json<S: StateStore + ?Sized, T: DeserializeOwned>(store: &S, key: StorageKey) -> Option<T> {
    let raw = match store.read(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(err) => {
            warn!(key = %key, error = %err, "Could not read stored value");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => {
            debug!(key = %key, "Loaded stored value");
            Some(value)
        }
        Err(err) => {
            warn!(key = %key, error = %err, "Discarding unreadable stored value");
            None
        }
    }
}

/// In-memory store.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<StorageKey, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, bypassing serialization (useful for corrupt-data tests).
    pub fn with_raw(mut self, key: StorageKey, raw: impl Into<String>) -> Self {
        self.entries.insert(key, raw.into());
        self
    }

    pub fn get(&self, key: StorageKey) -> Option<&str> {
        self.entries.get(&key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl StateStore for MemoryStore {
    fn read(&self, key: StorageKey) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(&key).cloned())
    }

    fn write(&mut self, key: StorageKey, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key, value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: StorageKey) -> Result<(), StoreError> {
        self.entries.remove(&key);
        Ok(())
    }
}

/// Store backed by a directory, one `<key>.json` file per key.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    /// Open (and create if needed) a store directory.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: StorageKey) -> PathBuf {
        self.root.join(format!("{}.json", key.as_str()))
    }
}

impl StateStore for DirectoryStore {
    fn read(&self, key: StorageKey) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&mut self, key: StorageKey, value: &str) -> Result<(), StoreError> {
        // Readers only ever see a complete value.
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value)?;
        std::fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove(&mut self, key: StorageKey) -> Result<(), StoreError> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        store.write(StorageKey::PreviewMode, "true").unwrap();

        assert_eq!(read_json::<_, bool>(&store, StorageKey::PreviewMode), Some(true));

        store.remove(StorageKey::PreviewMode).unwrap();
        assert_eq!(read_json::<_, bool>(&store, StorageKey::PreviewMode), None);
        // removing twice is fine
        store.remove(StorageKey::PreviewMode).unwrap();
    }

    #[test]
    fn test_read_json_falls_back_on_garbage() {
        let store = MemoryStore::new().with_raw(StorageKey::SidebarOpen, "{not json");
        assert_eq!(read_json::<_, bool>(&store, StorageKey::SidebarOpen), None);
    }

    #[test]
    fn test_directory_store() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = DirectoryStore::open(dir.path().join("state")).unwrap();

        assert_eq!(store.read(StorageKey::Sections).unwrap(), None);

        store.write(StorageKey::Sections, "[]").unwrap();
        assert_eq!(store.read(StorageKey::Sections).unwrap().as_deref(), Some("[]"));
        assert!(dir
            .path()
            .join("state")
            .join("websiteBuilder_sections.json")
            .exists());

        store.remove(StorageKey::Sections).unwrap();
        assert_eq!(store.read(StorageKey::Sections).unwrap(), None);
        store.remove(StorageKey::Sections).unwrap();
    }

    #[test]
    fn test_key_names_are_namespaced() {
        for key in StorageKey::ALL {
            assert!(key.as_str().starts_with("websiteBuilder_"));
        }
    }
}
