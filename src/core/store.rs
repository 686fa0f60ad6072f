//! File-backed key-value store
//!
//! Holds the whole mapping in memory and rewrites the backing JSON file on
//! every save.

use crate::{
    error::{ClipError, Result},
    utils::fs::FileSystemUtils,
};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Mapping from key to value, restored from and persisted to a JSON file
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
    entries: BTreeMap<String, String>,
    fs_utils: FileSystemUtils,
}

impl Store {
    /// Create an empty store backed by `path` without touching the file
    #[must_use]
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            entries: BTreeMap::new(),
            fs_utils: FileSystemUtils::new(),
        }
    }

    /// Load the store from `path`.
    ///
    /// A missing file yields an empty store. A file that cannot be read or
    /// does not decode to a string-to-string object is an error; nothing is
    /// recovered from it.
    #[instrument]
    pub fn load<P: AsRef<Path> + std::fmt::Debug>(path: P) -> Result<Self> {
        let mut store = Self::new(path.as_ref());

        let contents = store
            .fs_utils
            .read_file_if_exists(&store.path)
            .map_err(|e| ClipError::load(&store.path, e))?;

        match contents {
            Some(text) => {
                store.entries =
                    serde_json::from_str(&text).map_err(|e| ClipError::decode(&store.path, e))?;
                debug!("Loaded {} entries", store.entries.len());
            }
            None => info!("No store file at {}, starting empty", store.path.display()),
        }

        Ok(store)
    }

    /// Write the entire mapping to the backing file, replacing prior contents
    #[instrument(skip(self), fields(path = %self.path.display(), entries = self.entries.len()))]
    pub fn save(&self) -> Result<()> {
        let mut json = serde_json::to_string_pretty(&self.entries)
            .map_err(|source| ClipError::Encode { source })?;
        json.push('\n');

        self.fs_utils
            .write_file_atomic(&self.path, json)
            .map_err(|e| ClipError::save(&self.path, e))?;

        debug!("Store saved");
        Ok(())
    }

    /// Look up the value stored under `key`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Insert or overwrite `key`. Call [`Store::save`] to make it durable.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// All keys currently held, in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("clipboard.json");

        let store = Store::load(&path).unwrap();

        assert!(store.is_empty());
        assert!(!path.exists());
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("clipboard.json");

        let mut store = Store::new(&path);
        store.set("greeting", "hello world");
        store.set("path", "/usr/local/bin");
        store.save().unwrap();

        let reloaded = Store::load(&path).unwrap();
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.get("greeting"), Some("hello world"));
        assert_eq!(reloaded.get("path"), Some("/usr/local/bin"));
    }

    #[test]
    fn test_set_overwrites_existing_key() {
        let mut store = Store::new("unused.json");
        store.set("k", "first");
        store.set("k", "second");

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("k"), Some("second"));
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let mut store = Store::new("unused.json");
        store.set("Key", "upper");
        store.set("key", "lower");

        assert_eq!(store.keys().collect::<Vec<_>>(), vec!["Key", "key"]);
        assert_eq!(store.get("KEY"), None);
    }

    #[test]
    fn test_saved_file_uses_two_space_indent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("clipboard.json");

        let mut store = Store::new(&path);
        store.set("a", "1");
        store.save().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{\n  \"a\": \"1\"\n}\n");
    }

    #[test]
    fn test_empty_store_saves_empty_object() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("clipboard.json");

        Store::new(&path).save().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{}\n");
    }

    #[test]
    fn test_corrupt_file_fails_to_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("clipboard.json");
        fs::write(&path, "{ not json").unwrap();

        let err = Store::load(&path).unwrap_err();
        assert!(matches!(err, ClipError::Decode { .. }));
    }

    #[test]
    fn test_non_string_values_fail_to_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("clipboard.json");
        fs::write(&path, r#"{"a": 1}"#).unwrap();

        assert!(matches!(
            Store::load(&path).unwrap_err(),
            ClipError::Decode { .. }
        ));
    }

    #[test]
    fn test_empty_file_fails_to_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("clipboard.json");
        fs::write(&path, "").unwrap();

        assert!(Store::load(&path).is_err());
    }

    #[test]
    fn test_unreadable_path_fails_to_load() {
        let temp_dir = TempDir::new().unwrap();

        let err = Store::load(temp_dir.path()).unwrap_err();
        assert!(matches!(err, ClipError::Load { .. }));
    }

    #[test]
    fn test_save_into_directory_path_fails() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = Store::new(temp_dir.path());
        store.set("k", "v");

        assert!(matches!(store.save().unwrap_err(), ClipError::Save { .. }));
    }
}
