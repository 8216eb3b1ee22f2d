//! Key-value persistence behind the watchlist.

use std::collections::HashMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::debug;

use crate::StoreError;

/// String key-value persistence.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-process store, lost on drop.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.lock().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// One `<KEY>.json` file per key under a root directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StoreError::Io(err)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.root)?;

        let path = self.path_for(key);
        let tmp_path = self.root.join(format!(".{key}.json.tmp"));
        {
            let mut file = fs::File::create(&tmp_path)?;
            file.write_all(value.as_bytes())?;
            file.sync_all()?;
        }
        fs::rename(&tmp_path, &path)?;

        debug!(path = %path.display(), bytes = value.len(), "store write");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_overwrites_values() {
        let store = MemoryStore::new();
        assert_eq!(store.get("STOCKS").expect("get"), None);

        store.set("STOCKS", "[]").expect("set");
        store.set("STOCKS", "[1]").expect("set");
        assert_eq!(store.get("STOCKS").expect("get").as_deref(), Some("[1]"));
    }

    #[test]
    fn file_store_creates_root_on_first_write() {
        let temp = tempfile::tempdir().expect("temp dir");
        let store = FileStore::new(temp.path().join("nested").join("store"));

        assert_eq!(store.get("INDICES").expect("missing key reads as none"), None);

        store.set("INDICES", r#"["ind_nifty50list"]"#).expect("set");
        assert!(store.root().join("INDICES.json").is_file());
        assert_eq!(
            store.get("INDICES").expect("get").as_deref(),
            Some(r#"["ind_nifty50list"]"#)
        );
    }

    #[test]
    fn file_store_leaves_no_temp_files_behind() {
        let temp = tempfile::tempdir().expect("temp dir");
        let store = FileStore::new(temp.path());

        store.set("STOCKS", "[]").expect("set");
        store.set("STOCKS", "[ ]").expect("set");

        let names: Vec<_> = fs::read_dir(temp.path())
            .expect("read dir")
            .map(|entry| entry.expect("entry").file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("STOCKS.json")]);
    }
}
