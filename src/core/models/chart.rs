use std::collections::BTreeMap;

use chrono::{DateTime, Timelike, Utc};

use crate::core::models::analytics::FairnessMetrics;
use crate::core::models::decision::DecisionRecord;

/// One labelled bar.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

/// A horizontal bar chart with an optional fixed scale.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub bars: Vec<Bar>,
    /// Upper bound of the axis; `None` scales to the largest bar.
    pub scale: Option<f64>,
}

impl BarChart {
    pub fn scale_max(&self) -> f64 {
        self.scale.unwrap_or_else(|| {
            self.bars
                .iter()
                .map(|b| b.value)
                .fold(0.0_f64, f64::max)
        })
    }
}

/// Decisions and high-risk decisions in one hour.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineBucket {
    pub hour: DateTime<Utc>,
    pub decisions: u32,
    pub flagged: u32,
}

/// Everything the chart region shows. Rebuilt from scratch on every refresh.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSet {
    pub fairness: BarChart,
    pub timeline: Vec<TimelineBucket>,
    pub overall_risk: Option<String>,
    pub datasets_analyzed: u64,
}

impl ChartSet {
    pub fn build(metrics: &FairnessMetrics, decisions: &[DecisionRecord]) -> Self {
        Self {
            fairness: BarChart {
                title: "Fairness metrics".into(),
                bars: vec![
                    Bar {
                        label: "Equalized odds".into(),
                        value: metrics.equalized_odds,
                    },
                    Bar {
                        label: "Demographic parity".into(),
                        value: metrics.demographic_parity,
                    },
                ],
                scale: Some(1.0),
            },
            timeline: timeline(decisions),
            overall_risk: metrics.overall_risk.clone(),
            datasets_analyzed: metrics.datasets_analyzed,
        }
    }
}

/// Bucket decisions by the hour they were made, oldest first. Decisions
/// without a timestamp are left out.
fn timeline(decisions: &[DecisionRecord]) -> Vec<TimelineBucket> {
    let mut buckets: BTreeMap<DateTime<Utc>, (u32, u32)> = BTreeMap::new();
    for decision in decisions {
        let Some(hour) = decision.created_at.and_then(truncate_to_hour) else {
            continue;
        };
        let entry = buckets.entry(hour).or_default();
        entry.0 += 1;
        if decision
            .bias_risk
            .as_deref()
            .is_some_and(|r| r.eq_ignore_ascii_case("high"))
        {
            entry.1 += 1;
        }
    }
    buckets
        .into_iter()
        .map(|(hour, (decisions, flagged))| TimelineBucket {
            hour,
            decisions,
            flagged,
        })
        .collect()
}

fn truncate_to_hour(ts: DateTime<Utc>) -> Option<DateTime<Utc>> {
    ts.with_minute(0)?.with_second(0)?.with_nanosecond(0)
}
