//! Key-value record store
//!
//! One plain-JSON file per key under the application data directory.
//! Session and history live here as two independently-evictable records.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{AppError, AppResult};

pub struct KvStore {
    dir: PathBuf,
}

impl KvStore {
    /// Open the store, creating the data directory if needed
    pub fn open(dir: impl AsRef<Path>) -> AppResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)
            .map_err(|e| AppError::StorageError(format!("create {}: {}", dir.display(), e)))?;

        Ok(Self { dir })
    }

    /// Read and deserialize a record; `None` when the key was never written
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> AppResult<Option<T>> {
        let path = self.record_path(key);
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::StorageError(format!("read {}: {}", key, e)))?;

        let value = serde_json::from_str(&content)
            .map_err(|e| AppError::StorageError(format!("parse {}: {}", key, e)))?;

        Ok(Some(value))
    }

    /// Serialize and write a record, replacing any previous value
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> AppResult<()> {
        let content = serde_json::to_string_pretty(value)
            .map_err(|e| AppError::StorageError(format!("serialize {}: {}", key, e)))?;

        fs::write(self.record_path(key), content)
            .map_err(|e| AppError::StorageError(format!("write {}: {}", key, e)))?;

        Ok(())
    }

    /// Remove a record; absent keys are not an error
    pub fn delete(&self, key: &str) -> AppResult<()> {
        let path = self.record_path(key);
        if path.exists() {
            fs::remove_file(&path)
                .map_err(|e| AppError::StorageError(format!("delete {}: {}", key, e)))?;
        }
        Ok(())
    }

    fn record_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        count: u32,
    }

    #[test]
    fn test_set_get_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = KvStore::open(dir.path()).unwrap();

        let value = Sample { name: "demo".to_string(), count: 3 };
        store.set("sample", &value).unwrap();

        let loaded: Sample = store.get("sample").unwrap().unwrap();
        assert_eq!(loaded, value);
    }

    #[test]
    fn test_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = KvStore::open(dir.path()).unwrap();

        let loaded: Option<Sample> = store.get("absent").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_delete_removes_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = KvStore::open(dir.path()).unwrap();

        store.set("sample", &Sample { name: "x".to_string(), count: 1 }).unwrap();
        store.delete("sample").unwrap();

        let loaded: Option<Sample> = store.get("sample").unwrap();
        assert!(loaded.is_none());

        // Deleting again is still fine
        store.delete("sample").unwrap();
    }

    #[test]
    fn test_records_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = KvStore::open(dir.path()).unwrap();
            store.set("sample", &Sample { name: "persist".to_string(), count: 9 }).unwrap();
        }

        let reopened = KvStore::open(dir.path()).unwrap();
        let loaded: Sample = reopened.get("sample").unwrap().unwrap();
        assert_eq!(loaded.name, "persist");
    }
}
