use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One AI decision as listed by `GET /decisions`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DecisionRecord {
    pub id: i64,
    #[serde(default, alias = "timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, alias = "result")]
    pub decision_label: String,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub sensitive_attribute: Option<String>,
    #[serde(default)]
    pub owner_id: Option<i64>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, alias = "biasRisk")]
    pub bias_risk: Option<String>,
}
