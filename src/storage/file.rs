//! JSON-file key-value backend
//!
//! Each key maps to `<dir>/<key>.json`.

use std::path::PathBuf;

use crate::error::{RunwayError, RunwayResult};

use super::file_io::{read_optional, write_atomic};
use super::KeyValueStore;

/// Key-value store backed by one JSON file per key
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir` (created lazily on first write)
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Path of the file backing `key`
    pub fn path_for(&self, key: &str) -> RunwayResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(RunwayError::Persistence(format!(
                "Invalid storage key: '{}'",
                key
            )));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> RunwayResult<Option<String>> {
        read_optional(self.path_for(key)?)
    }

    fn set(&mut self, key: &str, value: &str) -> RunwayResult<()> {
        write_atomic(self.path_for(key)?, value)
    }

    fn remove(&mut self, key: &str) -> RunwayResult<()> {
        let path = self.path_for(key)?;
        if path.exists() {
            std::fs::remove_file(&path).map_err(|e| {
                RunwayError::Persistence(format!("Failed to remove {}: {}", path.display(), e))
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_key_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().to_path_buf());
        assert_eq!(store.get("budget").unwrap(), None);
    }

    #[test]
    fn test_set_get_remove() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileStore::new(temp_dir.path().join("data"));

        store.set("budget", "{\"totalBudget\":0}").unwrap();
        assert!(temp_dir.path().join("data").join("budget.json").exists());
        assert_eq!(
            store.get("budget").unwrap().as_deref(),
            Some("{\"totalBudget\":0}")
        );

        store.remove("budget").unwrap();
        assert_eq!(store.get("budget").unwrap(), None);
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().to_path_buf());
        assert!(store.get("../escape").unwrap_err().is_persistence());
        assert!(store.get("").is_err());
    }
}
