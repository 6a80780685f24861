use chrono::NaiveDate;
use serde::Deserialize;

/// One row of the AI decision report listing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReportRecord {
    pub id: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub model: String,
    #[serde(default, alias = "decisionCount")]
    pub decision_count: u64,
    #[serde(default, alias = "biasRate")]
    pub bias_rate: f64,
    #[serde(default, alias = "fairnessScore")]
    pub fairness_score: f64,
}

impl ReportRecord {
    /// Bias above 10% is flagged.
    pub fn bias_flagged(&self) -> bool {
        self.bias_rate > 0.1
    }

    /// Fairness under 0.70 is flagged.
    pub fn fairness_flagged(&self) -> bool {
        self.fairness_score < 0.7
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_camel_case_listing() {
        let r: ReportRecord = serde_json::from_str(
            r#"{"id": "RPT-7", "date": "2026-02-01", "model": "loan-v3",
                "decisionCount": 340, "biasRate": 0.12, "fairnessScore": 0.66}"#,
        )
        .unwrap();
        assert_eq!(r.decision_count, 340);
        assert!(r.bias_flagged());
        assert!(r.fairness_flagged());
    }
}
