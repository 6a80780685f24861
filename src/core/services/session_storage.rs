use tracing::warn;

use crate::core::errors::Result;
use crate::core::models::session::Durability;
use crate::core::traits::kv_store::KeyValueStore;

/// Slot holding the bearer token.
pub const TOKEN_KEY: &str = "jwt_token";

/// Slot holding the cached identity (JSON).
pub const USER_KEY: &str = "user";

/// One key-value store with a caller-chosen durability per write.
///
/// Reads look in the durable slot first, then the volatile one.
pub struct SessionStorage {
    durable: Box<dyn KeyValueStore>,
    volatile: Box<dyn KeyValueStore>,
}

impl SessionStorage {
    pub fn new(durable: Box<dyn KeyValueStore>, volatile: Box<dyn KeyValueStore>) -> Self {
        Self { durable, volatile }
    }

    fn slot(&self, durability: Durability) -> &dyn KeyValueStore {
        match durability {
            Durability::Durable => self.durable.as_ref(),
            Durability::Volatile => self.volatile.as_ref(),
        }
    }

    pub fn get(&self, key: &str) -> Result<Option<String>> {
        match self.durable.get(key)? {
            Some(value) => Ok(Some(value)),
            None => self.volatile.get(key),
        }
    }

    pub fn get_from(&self, key: &str, durability: Durability) -> Result<Option<String>> {
        self.slot(durability).get(key)
    }

    pub fn set(&self, key: &str, value: &str, durability: Durability) -> Result<()> {
        self.slot(durability).set(key, value)
    }

    /// Remove `key` from both slots. Both removals are attempted even when
    /// the first one fails; the first error is returned.
    pub fn remove_everywhere(&self, key: &str) -> Result<()> {
        let durable = self.durable.remove(key);
        let volatile = self.volatile.remove(key);
        if let Err(e) = &durable {
            warn!(key, error = %e, "failed to clear durable session slot");
        }
        if let Err(e) = &volatile {
            warn!(key, error = %e, "failed to clear volatile session slot");
        }
        durable.and(volatile)
    }
}
