use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use crate::adapters::http::api_client::ApiClient;
use crate::adapters::navigation::terminal_navigator::TerminalNavigator;
use crate::adapters::storage::file_store::JsonFileStore;
use crate::adapters::storage::report_writer::sha256_hex;
use crate::config::app_config::AppConfig;
use crate::core::errors::Result;
use crate::core::services::auth_service::AuthService;
use crate::core::services::feed_service::FeedService;
use crate::core::services::session_storage::SessionStorage;
use crate::core::traits::navigator::Navigator;

static STATE_DIR: OnceLock<PathBuf> = OnceLock::new();
static API_URL: OnceLock<String> = OnceLock::new();

/// Initialize the global state directory and API URL override.
/// Without `--state-dir`, uses `<config dir>/ethics-monitor`.
pub fn init(state_dir: Option<&str>, api_url: Option<&str>) {
    if let Some(dir) = state_dir {
        let _ = STATE_DIR.set(PathBuf::from(dir));
    }
    if let Some(url) = api_url {
        let _ = API_URL.set(url.to_string());
    }
}

/// Directory holding `config.toml` and the durable session slot.
pub fn state_dir() -> &'static Path {
    STATE_DIR.get_or_init(default_state_dir).as_path()
}

fn default_state_dir() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("ethics-monitor"))
        .unwrap_or_else(|| PathBuf::from(".ethics-monitor"))
}

pub fn api_url_override() -> Option<&'static str> {
    API_URL.get().map(String::as_str)
}

/// Durable slot: survives reboots.
pub fn durable_session_path() -> PathBuf {
    state_dir().join("session.json")
}

/// Volatile slot: lives in the temp dir, keyed by state dir so that two
/// state dirs never share it.
pub fn volatile_session_path() -> PathBuf {
    let digest = sha256_hex(state_dir().to_string_lossy().as_bytes());
    std::env::temp_dir()
        .join(format!("ethics-monitor-{}", &digest[..12]))
        .join("session.json")
}

/// Load config.toml and apply the `--api-url` override.
pub fn load_config() -> Result<AppConfig> {
    AppConfig::load(state_dir())?.with_api_url(api_url_override())
}

/// Single-threaded runtime for the async client.
pub fn runtime() -> Result<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?)
}

/// Everything a command needs to talk to the backend.
pub struct Session {
    pub config: AppConfig,
    pub client: Arc<ApiClient>,
    pub auth: AuthService,
    pub feeds: FeedService,
}

impl Session {
    pub fn open() -> Result<Self> {
        let config = load_config()?;
        let storage = Arc::new(SessionStorage::new(
            Box::new(JsonFileStore::new(durable_session_path())),
            Box::new(JsonFileStore::new(volatile_session_path())),
        ));
        let navigator: Arc<dyn Navigator> = Arc::new(TerminalNavigator::new());
        let client = Arc::new(ApiClient::new(
            &config.api.base_url,
            config.timeout(),
            Arc::clone(&storage),
            Arc::clone(&navigator),
        )?);
        tracing::debug!(base_url = client.base_url(), state_dir = %state_dir().display(), "session opened");

        Ok(Self {
            auth: AuthService::new(Arc::clone(&client), storage, navigator),
            feeds: FeedService::new(Arc::clone(&client)),
            client,
            config,
        })
    }
}
