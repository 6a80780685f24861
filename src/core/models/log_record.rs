use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

/// One entry of the remote append-only audit log.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LogRecord {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub hash: String,
}

fn default_level() -> String {
    "info".to_string()
}

/// Log ids are integers on some backends and strings on others.
fn id_as_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    })
}

/// Filters applied to the log view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogFilter {
    pub level: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub search: Option<String>,
}

impl LogFilter {
    /// Query parameters for `GET /admin/logs`, excluding paging.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(level) = &self.level {
            pairs.push(("event_type", level.clone()));
        }
        if let Some(start) = self.start_date {
            pairs.push(("start_date", start.format("%Y-%m-%d").to_string()));
        }
        if let Some(end) = self.end_date {
            pairs.push(("end_date", end.format("%Y-%m-%d").to_string()));
        }
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("search", search.to_string()));
        }
        pairs
    }
}
