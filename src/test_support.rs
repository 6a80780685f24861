//! Shared fixtures for unit tests.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::adapters::http::api_client::ApiClient;
use crate::adapters::storage::memory_store::MemoryStore;
use crate::core::errors::{MonitorError, Result};
use crate::core::services::session_storage::SessionStorage;
use crate::core::traits::kv_store::KeyValueStore;
use crate::core::traits::navigator::{Navigator, Route};

/// Navigator that records every navigation.
#[derive(Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.lock().unwrap().push(route);
    }
}

/// Store whose writes always fail, for exercising cleanup paths.
pub struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<()> {
        Err(MonitorError::StorageError {
            path: "broken".into(),
            detail: "read-only".into(),
        })
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.set(key, "")
    }
}

pub fn memory_storage() -> Arc<SessionStorage> {
    Arc::new(SessionStorage::new(
        Box::new(MemoryStore::new()),
        Box::new(MemoryStore::new()),
    ))
}

pub struct Fixture {
    pub client: Arc<ApiClient>,
    pub storage: Arc<SessionStorage>,
    pub navigator: Arc<RecordingNavigator>,
}

/// Client pointed at `base` with in-memory session slots.
pub fn fixture(base: &str) -> Fixture {
    fixture_with(base, memory_storage())
}

pub fn fixture_with(base: &str, storage: Arc<SessionStorage>) -> Fixture {
    let navigator = Arc::new(RecordingNavigator::default());
    let client = ApiClient::new(
        base,
        Duration::from_secs(5),
        Arc::clone(&storage),
        navigator.clone() as Arc<dyn Navigator>,
    )
    .unwrap();
    Fixture {
        client: Arc::new(client),
        storage,
        navigator,
    }
}

/// Address nothing listens on.
pub const UNREACHABLE: &str = "http://127.0.0.1:9";
