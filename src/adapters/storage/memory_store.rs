use std::collections::HashMap;
use std::sync::Mutex;

use crate::core::errors::Result;
use crate::core::traits::kv_store::KeyValueStore;

/// In-process slot, lost when the process exits.
#[derive(Default)]
pub struct MemoryStore {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self
            .slots
            .lock()
            .map(|s| s.get(key).cloned())
            .unwrap_or_default())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if let Ok(mut slots) = self.slots.lock() {
            slots.insert(key.to_string(), value.to_string());
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        if let Ok(mut slots) = self.slots.lock() {
            slots.remove(key);
        }
        Ok(())
    }
}
