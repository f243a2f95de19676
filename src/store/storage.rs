//! Key-value storage backends.

use super::StoreError;
use log::*;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// String key-value storage holding JSON-encoded values.
///
pub trait Storage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Stores each key as `<key>.json` under a directory.
///
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStorage { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the storage directory if it does not exist yet.
    ///
    pub fn create_dir(&self) -> Result<(), StoreError> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).map_err(|e| StoreError::CreateDirectoryFailed {
                path: self.dir.clone(),
                source: e,
            })?;
        }
        Ok(())
    }

    /// Key stored at `path`, if it names a value file. Staging files are not
    /// values.
    ///
    pub fn key_for(path: &Path) -> Option<String> {
        let name = path.file_name()?.to_str()?;
        let key = name.strip_suffix(".json")?;
        if key.is_empty() || key.starts_with('.') {
            return None;
        }
        Some(key.to_string())
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| StoreError::ReadFailed { path, source: e })
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.create_dir()?;
        let path = self.path_for(key);
        // Write then rename so a concurrent reader never sees a partial file.
        let staging = self.dir.join(format!(".{}.json.tmp", key));
        fs::write(&staging, value).map_err(|e| StoreError::WriteFailed {
            path: staging.clone(),
            source: e,
        })?;
        fs::rename(&staging, &path).map_err(|e| StoreError::WriteFailed {
            path: path.clone(),
            source: e,
        })?;
        debug!("Wrote {}", path.display());
        Ok(())
    }
}

/// In-memory storage. Clones share the same map, which lets tests play the
/// part of a second dashboard instance.
///
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        MemoryStorage::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
