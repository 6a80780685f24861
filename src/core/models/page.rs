use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::core::errors::{MonitorError, Result};

/// One page of a remote listing.
///
/// Feeds answer either with a bare JSON array or with an envelope such as
/// `{"logs": [...], "total": 120, "page": 2, "totalPages": 6}`.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: Option<u64>,
    pub page: Option<u32>,
    pub total_pages: Option<u32>,
}

impl<T> Page<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: None,
            page: None,
            total_pages: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: DeserializeOwned> Page<T> {
    /// Decode a page, looking for the item array under `items_key` (or `items`).
    pub fn from_value(value: Value, items_key: &str) -> Result<Self> {
        match value {
            Value::Array(_) => Ok(Self {
                items: decode_items(value, items_key)?,
                total: None,
                page: None,
                total_pages: None,
            }),
            Value::Object(mut map) => {
                let items = map
                    .remove(items_key)
                    .or_else(|| map.remove("items"))
                    .unwrap_or(Value::Array(Vec::new()));
                let number = |keys: &[&str]| {
                    keys.iter()
                        .find_map(|k| map.get(*k).and_then(Value::as_u64))
                };
                Ok(Self {
                    total: number(&["total"]),
                    page: number(&["page"]).and_then(|n| u32::try_from(n).ok()),
                    total_pages: number(&["totalPages", "total_pages"])
                        .and_then(|n| u32::try_from(n).ok()),
                    items: decode_items(items, items_key)?,
                })
            }
            other => Err(MonitorError::ParseError {
                detail: format!("expected a list of {items_key}, got {other}"),
            }),
        }
    }
}

fn decode_items<T: DeserializeOwned>(value: Value, items_key: &str) -> Result<Vec<T>> {
    serde_json::from_value(value).map_err(|e| MonitorError::ParseError {
        detail: format!("malformed {items_key} list: {e}"),
    })
}
