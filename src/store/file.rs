//! File-backed store: one JSON file per key in a data directory.

use std::fs;
use std::path::{Path, PathBuf};

use super::CatalogStore;
use crate::{BookstallError, Result};

/// Key-value store persisting each key as `<dir>/<key>.json`.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`, creating the directory if needed.
    pub fn new(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();

        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }

        Ok(Self { dir })
    }

    /// Directory the store writes into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> Result<PathBuf> {
        // Keys become file names; reject anything that could escape the dir.
        if key.is_empty() || key.contains(['/', '\\', '.']) {
            return Err(BookstallError::Storage(format!(
                "invalid storage key: {key:?}"
            )));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl CatalogStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key)?;

        if !path.exists() {
            return Ok(None);
        }

        Ok(Some(fs::read_to_string(&path)?))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key)?;
        fs::write(&path, value)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::CATALOG_KEY;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn create_test_store() -> (FileStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().join("catalog")).unwrap();
        (store, temp_dir)
    }

    #[test]
    fn test_new_creates_directory() {
        let (store, _temp_dir) = create_test_store();
        assert!(store.dir().is_dir());
    }

    #[test]
    fn test_read_missing_returns_none() {
        let (store, _temp_dir) = create_test_store();
        assert_eq!(store.read(CATALOG_KEY).unwrap(), None);
    }

    #[test]
    fn test_write_then_read_round_trips() {
        let (mut store, _temp_dir) = create_test_store();
        store.write(CATALOG_KEY, "[{\"id\":1}]").unwrap();
        assert_eq!(
            store.read(CATALOG_KEY).unwrap().as_deref(),
            Some("[{\"id\":1}]")
        );
    }

    #[test]
    fn test_write_lands_in_expected_file() {
        let (mut store, _temp_dir) = create_test_store();
        store.write(CATALOG_KEY, "[]").unwrap();
        assert!(store.dir().join("books.json").is_file());
    }

    #[test]
    fn test_value_survives_reopening_the_store() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("catalog");

        let mut store = FileStore::new(&dir).unwrap();
        store.write(CATALOG_KEY, "[7]").unwrap();
        drop(store);

        let reopened = FileStore::new(&dir).unwrap();
        assert_eq!(reopened.read(CATALOG_KEY).unwrap().as_deref(), Some("[7]"));
    }

    #[test]
    fn test_traversal_keys_are_rejected() {
        let (store, _temp_dir) = create_test_store();
        assert!(store.read("../escape").is_err());
        assert!(store.read("a/b").is_err());
        assert!(store.read("").is_err());
    }
}
