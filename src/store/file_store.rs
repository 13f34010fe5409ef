use std::fs;
use std::path::{Path, PathBuf};

use super::kv::{KeyValueStore, Result, StorageError};

/// File-backed store: one `{key}.json` document per key
pub struct FileStore {
    base_path: PathBuf,
}

impl FileStore {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    /// Get the default data directory
    pub fn default_data_dir() -> Result<PathBuf> {
        dirs::data_local_dir()
            .map(|p| p.join("studyloom"))
            .ok_or(StorageError::DataDirNotFound)
    }

    /// Initialize the data directory
    pub fn init(&self) -> Result<()> {
        fs::create_dir_all(&self.base_path)?;
        Ok(())
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Keys become file names, so only a conservative character set is allowed
    fn item_path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.base_path.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.item_path(key)?;
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)?;
        Ok(Some(content))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let path = self.item_path(key)?;
        fs::create_dir_all(&self.base_path)?;

        // Write-then-rename so a crash never leaves a half-written document
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, value)?;
        fs::rename(&tmp_path, &path)?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let path = self.item_path(key)?;
        if path.exists() {
            fs::remove_file(&path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (FileStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().join("data"));
        (store, temp_dir)
    }

    #[test]
    fn test_missing_key_is_absent() {
        let (store, _temp) = create_test_store();
        assert!(store.get_item("assignments_v1").unwrap().is_none());
    }

    #[test]
    fn test_set_creates_directory_and_file() {
        let (store, _temp) = create_test_store();
        store.set_item("todo_eisenhower_v1", "[]").unwrap();

        let path = store.base_path().join("todo_eisenhower_v1.json");
        assert!(path.exists());
        assert_eq!(
            store.get_item("todo_eisenhower_v1").unwrap().as_deref(),
            Some("[]")
        );
        assert!(!store.base_path().join("todo_eisenhower_v1.json.tmp").exists());
    }

    #[test]
    fn test_remove_item() {
        let (store, _temp) = create_test_store();
        store.set_item("flashcards_v2", "{}").unwrap();
        store.remove_item("flashcards_v2").unwrap();
        assert!(store.get_item("flashcards_v2").unwrap().is_none());

        // Removing twice is fine
        store.remove_item("flashcards_v2").unwrap();
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let (store, _temp) = create_test_store();
        assert!(matches!(
            store.set_item("../escape", "{}"),
            Err(StorageError::InvalidKey(_))
        ));
        assert!(matches!(store.get_item(""), Err(StorageError::InvalidKey(_))));
    }
}
