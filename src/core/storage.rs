//! # Key-Value Storage
//!
//! The persistence primitive underneath `PersistenceAdapter`: string values
//! under string keys, nothing more.
//!
//! - `FileStore`: one JSON file per key in the data directory.
//! - `MemoryStore`: in-process map, for tests and embedding.
//!
//! File writes use atomic rename (write `.tmp`, then `rename()`) so a crash
//! mid-write never leaves a half-written list behind.

use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;
use log::debug;

#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns `Ok(None)` if the key was never written.
    async fn get(&self, key: &str) -> io::Result<Option<String>>;

    /// Overwrites any previous value.
    async fn set(&self, key: &str, value: &str) -> io::Result<()>;
}

/// Stores each key as `<dir>/<key>.json`.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> io::Result<Option<String>> {
        let path = self.path_for(key);
        match tokio::fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn set(&self, key: &str, value: &str) -> io::Result<()> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let path = self.path_for(key);
        let tmp_path = path.with_extension("tmp");
        tokio::fs::write(&tmp_path, value).await?;
        tokio::fs::rename(&tmp_path, &path).await?;
        debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, bypassing serialization.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.insert(key, value);
        store
    }

    pub fn insert(&self, key: &str, value: &str) {
        self.lock().insert(key.to_string(), value.to_string());
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // A panic while holding the lock leaves the map itself intact
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.raw(key))
    }

    async fn set(&self, key: &str, value: &str) -> io::Result<()> {
        self.insert(key, value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_file_store_missing_key_is_none() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert_eq!(store.get("todos").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_file_store_set_then_get() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path());
        store.set("todos", "[]").await.unwrap();
        assert_eq!(store.get("todos").await.unwrap().as_deref(), Some("[]"));
        assert!(dir.path().join("todos.json").exists());
    }

    #[tokio::test]
    async fn test_file_store_overwrites_and_leaves_no_tmp() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path());
        store.set("todos", "first").await.unwrap();
        store.set("todos", "second").await.unwrap();
        assert_eq!(store.get("todos").await.unwrap().as_deref(), Some("second"));
        assert!(!dir.path().join("todos.tmp").exists());
    }

    #[tokio::test]
    async fn test_file_store_creates_missing_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let store = FileStore::new(&nested);
        store.set("todos", "[]").await.unwrap();
        assert!(nested.join("todos.json").exists());
    }

    #[tokio::test]
    async fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k").await.unwrap(), None);
        store.set("k", "v").await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("v"));
    }
}
