use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::core::errors::{MonitorError, Result};
use crate::core::traits::kv_store::KeyValueStore;

/// Key-value slot persisted as a single JSON object on disk.
///
/// Example `session.json`:
/// ```text
/// {"jwt_token": "eyJhbGciOi...", "user": "{\"id\":1,\"role\":\"admin\"}"}
/// ```
///
/// Every write replaces the whole file through a temp file and a rename,
/// so readers never observe a half-written slot.
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Create a store backed by the given file path.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }

    /// Return the file path this store reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn storage_error(&self, detail: impl Into<String>) -> MonitorError {
        MonitorError::StorageError {
            path: self.path.clone(),
            detail: detail.into(),
        }
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content)
            .map_err(|e| self.storage_error(format!("corrupted session file: {e}")))
    }

    fn write_all(&self, slots: &BTreeMap<String, String>) -> Result<()> {
        if slots.is_empty() {
            if self.path.exists() {
                std::fs::remove_file(&self.path)?;
            }
            return Ok(());
        }

        let parent = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        std::fs::create_dir_all(parent)?;

        let json = serde_json::to_string_pretty(slots)
            .map_err(|e| self.storage_error(format!("failed to serialize slots: {e}")))?;

        let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
        tmp.write_all(json.as_bytes())?;
        tmp.persist(&self.path)
            .map_err(|e| self.storage_error(format!("failed to replace file: {e}")))?;
        Ok(())
    }

    /// Read-modify-write under the store's lock.
    fn update(&self, f: impl FnOnce(&mut BTreeMap<String, String>) -> bool) -> Result<()> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| self.storage_error("lock poisoned"))?;
        let mut slots = self.read_all()?;
        if f(&mut slots) {
            self.write_all(&slots)?;
        }
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.update(|slots| {
            slots.insert(key.to_string(), value.to_string());
            true
        })
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.update(|slots| slots.remove(key).is_some())
    }
}
