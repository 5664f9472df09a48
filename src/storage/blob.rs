use crate::error::{LarderError, Result};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Opaque string-keyed blob storage.
///
/// Models the platform key-value store the app persists into: one whole
/// collection per key, no partial updates.
pub trait BlobStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Blob store backed by one `<key>.json` file per key inside a data directory.
pub struct FileBlobStore {
    data_path: PathBuf,
}

impl FileBlobStore {
    pub fn new(data_path: PathBuf) -> Self {
        Self { data_path }
    }

    fn blob_path(&self, key: &str) -> PathBuf {
        self.data_path.join(format!("{}.json", key))
    }

    fn atomic_write(&self, target_path: &Path, content: &str) -> Result<()> {
        let target_dir = target_path.parent().ok_or_else(|| {
            LarderError::Storage("Target path has no parent directory".to_string())
        })?;

        // Temp file must live in the target directory for the rename to be atomic
        let mut temp_file = NamedTempFile::new_in(target_dir)
            .map_err(|e| LarderError::Storage(format!("Failed to create temp file: {}", e)))?;

        use std::io::Write;
        temp_file
            .write_all(content.as_bytes())
            .map_err(|e| LarderError::Storage(format!("Failed to write to temp file: {}", e)))?;

        temp_file
            .as_file()
            .sync_all()
            .map_err(|e| LarderError::Storage(format!("Failed to sync temp file: {}", e)))?;

        temp_file
            .persist(target_path)
            .map_err(|e| LarderError::Storage(format!("Failed to persist file: {}", e)))?;

        Ok(())
    }
}

impl BlobStore for FileBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.blob_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&path)?;
        Ok(Some(content))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.data_path)?;
        self.atomic_write(&self.blob_path(key), value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_get_missing_key_is_none() {
        let dir = TempDir::new().unwrap();
        let store = FileBlobStore::new(dir.path().to_path_buf());
        assert!(store.get("foods").unwrap().is_none());
    }

    #[test]
    fn test_set_then_get() {
        let dir = TempDir::new().unwrap();
        let store = FileBlobStore::new(dir.path().to_path_buf());
        store.set("foods", "[1,2,3]").unwrap();
        assert_eq!(store.get("foods").unwrap().as_deref(), Some("[1,2,3]"));
    }

    #[test]
    fn test_set_overwrites() {
        let dir = TempDir::new().unwrap();
        let store = FileBlobStore::new(dir.path().to_path_buf());
        store.set("recipes", "[]").unwrap();
        store.set("recipes", "[{\"id\":1}]").unwrap();
        assert_eq!(
            store.get("recipes").unwrap().as_deref(),
            Some("[{\"id\":1}]")
        );
    }

    #[test]
    fn test_keys_are_independent() {
        let dir = TempDir::new().unwrap();
        let store = FileBlobStore::new(dir.path().to_path_buf());
        store.set("foods", "a").unwrap();
        store.set("recipes", "b").unwrap();
        assert_eq!(store.get("foods").unwrap().as_deref(), Some("a"));
        assert_eq!(store.get("recipes").unwrap().as_deref(), Some("b"));
    }

    #[test]
    fn test_set_creates_data_dir() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("missing").join("deeper");
        let store = FileBlobStore::new(nested.clone());
        store.set("foods", "[]").unwrap();
        assert!(nested.join("foods.json").exists());
    }
}
