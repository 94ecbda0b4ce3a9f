//! Legacy key-value storage.
//!
//! The deprecated medium: a synchronous string store with one file per key.
//! ```text
//! <LEGACY_DIR>/
//!   breastfeeding_data.json
//! ```
//!
//! It is only read during the one-time migration into the SQLite store.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::PathBuf;

use super::StorageError;

/// Key under which the old app kept the whole tracking data.
pub const LEGACY_KEY: &str = "breastfeeding_data";

/// Synchronous key-value store backed by a directory.
#[derive(Debug, Clone)]
pub struct LegacyStore {
    dir: PathBuf,
}

impl LegacyStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    /// Validates a key to prevent path traversal.
    fn validate_key(key: &str) -> Result<(), StorageError> {
        if key.is_empty()
            || !key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(())
    }

    fn item_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    pub fn contains(&self, key: &str) -> Result<bool, StorageError> {
        Self::validate_key(key)?;
        Ok(self.item_path(key).exists())
    }

    /// Returns `Ok(None)` if the key was never set.
    pub fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::validate_key(key)?;
        let path = self.item_path(key);

        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(path, e)),
        }
    }

    /// Stores a value, replacing any previous one.
    pub fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::validate_key(key)?;

        fs::create_dir_all(&self.dir).map_err(|e| StorageError::Io(self.dir.clone(), e))?;

        let path = self.item_path(key);

        // Write atomically using temp file + rename
        let temp_path = path.with_extension("json.tmp");

        let mut file =
            File::create(&temp_path).map_err(|e| StorageError::Io(temp_path.clone(), e))?;

        file.write_all(value.as_bytes())
            .map_err(|e| StorageError::Io(temp_path.clone(), e))?;

        file.sync_all()
            .map_err(|e| StorageError::Io(temp_path.clone(), e))?;

        fs::rename(&temp_path, &path).map_err(|e| StorageError::Io(path, e))?;

        Ok(())
    }

    /// Removes a key. Removing a missing key is not an error.
    pub fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        Self::validate_key(key)?;
        let path = self.item_path(key);

        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Io(path, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (LegacyStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = LegacyStore::new(temp_dir.path().join("legacy"));
        (store, temp_dir)
    }

    #[test]
    fn test_get_missing_returns_none() {
        let (store, _temp) = setup();
        assert!(store.get_item(LEGACY_KEY).unwrap().is_none());
        assert!(!store.contains(LEGACY_KEY).unwrap());
    }

    #[test]
    fn test_set_and_get() {
        let (store, _temp) = setup();

        store.set_item(LEGACY_KEY, "{}").unwrap();

        assert!(store.contains(LEGACY_KEY).unwrap());
        assert_eq!(store.get_item(LEGACY_KEY).unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn test_overwrite_existing() {
        let (store, _temp) = setup();

        store.set_item("theme", "light").unwrap();
        store.set_item("theme", "dark").unwrap();

        assert_eq!(store.get_item("theme").unwrap().as_deref(), Some("dark"));
        assert!(!store.dir().join("theme.json.tmp").exists());
    }

    #[test]
    fn test_remove_item() {
        let (store, _temp) = setup();

        store.set_item(LEGACY_KEY, "{}").unwrap();
        store.remove_item(LEGACY_KEY).unwrap();

        assert!(store.get_item(LEGACY_KEY).unwrap().is_none());
        // Second remove is a no-op
        store.remove_item(LEGACY_KEY).unwrap();
    }

    #[test]
    fn test_invalid_keys() {
        let (store, _temp) = setup();

        for key in ["", "../escape", "a/b", "a.b", "with space"] {
            assert!(
                matches!(store.get_item(key), Err(StorageError::InvalidKey(_))),
                "key {:?} should be rejected",
                key
            );
        }
    }
}
