use crate::core::errors::Result;

/// Port for a string key-value slot (the terminal counterpart of
/// `localStorage` / `sessionStorage`).
///
/// Implementations live in `adapters::storage`. Each call is atomic on its
/// own; callers never hold a lock across calls.
pub trait KeyValueStore: Send + Sync {
    /// Read a value, `None` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Insert or replace a value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete a value. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
