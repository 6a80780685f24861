use serde::Deserialize;

/// Placeholder shown when a value is unknown.
pub const NO_VALUE: &str = "--";

/// Read-only aggregate shown in the stats region of the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSnapshot {
    pub total_decisions: u64,
    pub bias_count: u64,
    pub bias_level: String,
    pub fairness_score: f64,
    pub system_health: f64,
}

impl DashboardSnapshot {
    /// Safe value rendered when the stats feed fails.
    pub fn fallback() -> Self {
        Self {
            total_decisions: 0,
            bias_count: 0,
            bias_level: NO_VALUE.to_string(),
            fairness_score: 0.0,
            system_health: 100.0,
        }
    }
}

/// Wire shape of `GET /stats/dashboard`.
#[derive(Debug, Deserialize)]
pub struct DashboardStatsPayload {
    #[serde(default, alias = "totalDecisions")]
    pub total_decisions: u64,
    #[serde(default, alias = "biasCount")]
    pub bias_count: u64,
    #[serde(default, alias = "biasLevel")]
    pub bias_level: Option<String>,
    #[serde(default, alias = "fairnessScore")]
    pub fairness_score: f64,
    #[serde(default = "full_health", alias = "systemHealth")]
    pub system_health: f64,
}

fn full_health() -> f64 {
    100.0
}

impl From<DashboardStatsPayload> for DashboardSnapshot {
    fn from(p: DashboardStatsPayload) -> Self {
        let bias_level = p
            .bias_level
            .filter(|l| !l.trim().is_empty())
            .unwrap_or_else(|| derive_bias_level(p.bias_count, p.total_decisions).to_string());
        Self {
            total_decisions: p.total_decisions,
            bias_count: p.bias_count,
            bias_level,
            fairness_score: p.fairness_score,
            system_health: p.system_health,
        }
    }
}

/// Bucket the share of biased decisions: under 5% Low, under 15% Medium, else High.
pub fn derive_bias_level(bias_count: u64, total: u64) -> &'static str {
    if total == 0 {
        return NO_VALUE;
    }
    let ratio = bias_count as f64 / total as f64;
    if ratio < 0.05 {
        "Low"
    } else if ratio < 0.15 {
        "Medium"
    } else {
        "High"
    }
}
