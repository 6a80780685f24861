use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::core::errors::{MonitorError, Result};
use crate::core::services::refresh_controller::DEFAULT_REFRESH_PERIOD;

/// Top-level configuration read from `<state dir>/config.toml`.
///
/// Every section is optional; a missing file yields the defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiSection,
    #[serde(default)]
    pub refresh: RefreshSection,
    #[serde(default)]
    pub pagination: PaginationSection,
}

impl AppConfig {
    /// Load the configuration from `<state_dir>/config.toml`.
    pub fn load(state_dir: &Path) -> Result<Self> {
        let config_path = state_dir.join("config.toml");
        if !config_path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&config_path)?;
        let config: Self = toml::from_str(&content).map_err(|e| MonitorError::InvalidConfig {
            detail: format!("Failed to parse {}: {e}", config_path.display()),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Apply the `--api-url` / `ETHICS_MONITOR_API_URL` override.
    pub fn with_api_url(mut self, api_url: Option<&str>) -> Result<Self> {
        if let Some(url) = api_url {
            self.api.base_url = url.to_string();
            self.validate()?;
        }
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        let url = self.api.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(MonitorError::InvalidConfig {
                detail: format!("api.base_url must start with http:// or https:// (got '{url}')"),
            });
        }
        if self.api.timeout_secs == 0 {
            return Err(MonitorError::InvalidConfig {
                detail: "api.timeout_secs must be greater than 0".into(),
            });
        }
        if self.refresh.interval_secs == 0 {
            return Err(MonitorError::InvalidConfig {
                detail: "refresh.interval_secs must be greater than 0".into(),
            });
        }
        if self.pagination.logs_page_size == 0 || self.pagination.reports_page_size == 0 {
            return Err(MonitorError::InvalidConfig {
                detail: "pagination page sizes must be greater than 0".into(),
            });
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_secs)
    }

    pub fn refresh_period(&self) -> Duration {
        Duration::from_secs(self.refresh.interval_secs)
    }
}

/// The `[api]` section.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ApiSection {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiSection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

/// The `[refresh]` section.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RefreshSection {
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

impl Default for RefreshSection {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
        }
    }
}

fn default_interval_secs() -> u64 {
    DEFAULT_REFRESH_PERIOD.as_secs()
}

/// The `[pagination]` section.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PaginationSection {
    #[serde(default = "default_logs_page_size")]
    pub logs_page_size: u32,
    #[serde(default = "default_reports_page_size")]
    pub reports_page_size: u32,
}

impl Default for PaginationSection {
    fn default() -> Self {
        Self {
            logs_page_size: default_logs_page_size(),
            reports_page_size: default_reports_page_size(),
        }
    }
}

fn default_logs_page_size() -> u32 {
    20
}

fn default_reports_page_size() -> u32 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(dir.path()).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.refresh_period(), Duration::from_secs(30));
        assert_eq!(config.pagination.logs_page_size, 20);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("config.toml"),
            "[api]\nbase_url = \"http://monitor.internal:8001\"\n",
        )
        .unwrap();

        let config = AppConfig::load(dir.path()).unwrap();
        assert_eq!(config.api.base_url, "http://monitor.internal:8001");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.pagination.reports_page_size, 10);
    }

    #[test]
    fn invalid_toml_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.toml"), "[api\n").unwrap();
        assert!(matches!(
            AppConfig::load(dir.path()),
            Err(MonitorError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn zero_interval_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.toml"), "[refresh]\ninterval_secs = 0\n").unwrap();
        assert!(AppConfig::load(dir.path()).is_err());
    }

    #[test]
    fn api_url_override_is_validated() {
        assert!(AppConfig::default().with_api_url(Some("ftp://x")).is_err());
        let config = AppConfig::default()
            .with_api_url(Some("https://ethics.example.org/api"))
            .unwrap();
        assert_eq!(config.api.base_url, "https://ethics.example.org/api");
    }
}
