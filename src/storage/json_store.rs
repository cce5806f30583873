//! File-backed store
//!
//! Each key lives in its own `<key>.json` file inside the data directory.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::paths::FinsmartPaths;
use crate::error::FinsmartResult;

use super::file_io::{read_optional, write_atomic};
use super::{Store, StoreKey};

/// Store that keeps each list in a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at `dir` (created on first write)
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Create a store in the application's data directory
    pub fn from_paths(paths: &FinsmartPaths) -> Self {
        Self::new(paths.data_dir())
    }

    /// Directory holding the files
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing a key
    pub fn file_for(&self, key: StoreKey) -> PathBuf {
        self.dir.join(format!("{}.json", key.as_str()))
    }
}

impl Store for JsonFileStore {
    fn get(&self, key: StoreKey) -> FinsmartResult<Option<String>> {
        read_optional(self.file_for(key))
    }

    fn set(&self, key: StoreKey, value: &str) -> FinsmartResult<()> {
        let path = self.file_for(key);
        debug!("Writing {} bytes to {}", value.len(), path.display());
        write_atomic(path, value.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_per_key() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path());

        assert_eq!(
            store.file_for(StoreKey::Goals),
            temp_dir.path().join("finsmartai_goals.json")
        );
    }

    #[test]
    fn test_get_missing_then_set() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("data"));

        assert_eq!(store.get(StoreKey::Transactions).unwrap(), None);

        store.set(StoreKey::Transactions, "[]").unwrap();
        assert_eq!(
            store.get(StoreKey::Transactions).unwrap().as_deref(),
            Some("[]")
        );
        // Keys are independent
        assert_eq!(store.get(StoreKey::Goals).unwrap(), None);
    }

    #[test]
    fn test_from_paths_uses_data_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinsmartPaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = JsonFileStore::from_paths(&paths);
        assert_eq!(store.dir(), paths.data_dir().as_path());
    }
}
