use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Aggregate fairness metrics from `GET /ai/metrics`; feeds the charts.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FairnessMetrics {
    #[serde(default)]
    pub equalized_odds: f64,
    #[serde(default)]
    pub demographic_parity: f64,
    #[serde(default)]
    pub overall_risk: Option<String>,
    #[serde(default)]
    pub datasets_analyzed: u64,
}

/// Body of `POST /ai/analyze-fairness`.
#[derive(Debug, Serialize)]
pub struct AnalyzeRequest<'a> {
    pub dataset_name: &'a str,
}

/// Result of an on-demand fairness analysis.
#[derive(Debug, Clone, Deserialize)]
pub struct FairnessAnalysis {
    #[serde(default)]
    pub metrics: Value,
    #[serde(default)]
    pub risk_analysis: Value,
    #[serde(default)]
    pub explanation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_tolerate_missing_fields() {
        let m: FairnessMetrics = serde_json::from_str(r#"{"equalized_odds": 0.87}"#).unwrap();
        assert_eq!(m.equalized_odds, 0.87);
        assert_eq!(m.datasets_analyzed, 0);
        assert!(m.overall_risk.is_none());
    }
}
