//! Key-value storage backends

use crate::error::{Result, TwolistError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;

/// Durable string-keyed blob storage
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value under `key`, `None` if it was never written
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value under `key`
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// One `<key>.json` file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Self {
        FileStore { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Keys become file names, so they must stay inside `dir`
    fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(TwolistError::Storage(format!("Invalid storage key: '{}'", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)?).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir).await?;

        // Write-then-rename so readers never see a partial blob
        let tmp = self.dir.join(format!(".{}.json.tmp", key));
        fs::write(&tmp, value).await?;
        fs::rename(&tmp, &path).await?;
        Ok(())
    }
}

/// In-process store
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// Seed a value before handing the store out
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries
            .get_mut()
            .insert(key.to_string(), value.to_string());
        self
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_file_store_missing_key() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().to_path_buf());

        assert_eq!(store.get("works").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_file_store_set_then_get() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().join("state"));

        store.set("works", r#"{"1":"a"}"#).await.unwrap();
        store.set("works", r#"{"2":"b"}"#).await.unwrap();

        assert_eq!(
            store.get("works").await.unwrap().as_deref(),
            Some(r#"{"2":"b"}"#)
        );
        assert!(temp.path().join("state/works.json").exists());
        assert!(!temp.path().join("state/.works.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_file_store_keys_are_independent() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().to_path_buf());

        store.set("works", "w").await.unwrap();

        assert_eq!(store.get("travels").await.unwrap(), None);
        assert_eq!(store.get("works").await.unwrap().as_deref(), Some("w"));
    }

    #[tokio::test]
    async fn test_file_store_rejects_path_like_keys() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().join("state"));

        for key in ["", "../works", ".hidden", "a/b"] {
            assert!(matches!(
                store.set(key, "x").await,
                Err(TwolistError::Storage(_))
            ));
            assert!(matches!(store.get(key).await, Err(TwolistError::Storage(_))));
        }
        assert!(!temp.path().join("works.json").exists());
    }

    #[tokio::test]
    async fn test_memory_store_seed_and_overwrite() {
        let store = MemoryStore::new().with_entry("travels", "{}");

        assert_eq!(store.get("travels").await.unwrap().as_deref(), Some("{}"));
        store.set("travels", "x").await.unwrap();
        assert_eq!(store.get("travels").await.unwrap().as_deref(), Some("x"));
        assert_eq!(store.get("works").await.unwrap(), None);
    }
}
