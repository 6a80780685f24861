use std::sync::{Arc, LazyLock};

use regex::Regex;
use tracing::warn;

use crate::adapters::http::api_client::{ApiClient, Auth};
use crate::core::errors::{MonitorError, Result};
use crate::core::models::analytics::{AnalyzeRequest, FairnessAnalysis, FairnessMetrics};
use crate::core::models::dashboard::{DashboardSnapshot, DashboardStatsPayload};
use crate::core::models::decision::DecisionRecord;
use crate::core::models::log_record::{LogFilter, LogRecord};
use crate::core::models::page::Page;
use crate::core::models::report::ReportRecord;

static REPORT_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_.-]{0,63}$").expect("static regex"));

/// Validate a report id before it is used in a URL path and a file name.
pub fn validate_report_id(id: &str) -> Result<()> {
    if REPORT_ID.is_match(id) && !id.contains("..") {
        Ok(())
    } else {
        Err(MonitorError::InvalidInput {
            detail: format!(
                "'{id}' is not a valid report id (letters, digits, '-', '_' and '.' only)"
            ),
        })
    }
}

/// Typed access to every backend feed.
///
/// Each method maps to one endpoint; none of them retries.
#[derive(Clone)]
pub struct FeedService {
    client: Arc<ApiClient>,
}

impl FeedService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn try_dashboard_stats(&self) -> Result<DashboardSnapshot> {
        let payload: DashboardStatsPayload = self.client.get_json("/stats/dashboard").await?;
        Ok(payload.into())
    }

    /// Dashboard stats, or the zeroed fallback when the feed fails.
    pub async fn dashboard_stats(&self) -> DashboardSnapshot {
        match self.try_dashboard_stats().await {
            Ok(stats) => stats,
            Err(e) => {
                warn!(feed = "stats", error = %e.summary(), "rendering fallback stats");
                DashboardSnapshot::fallback()
            }
        }
    }

    pub async fn decisions(&self, limit: u32, offset: u32) -> Result<Page<DecisionRecord>> {
        let query = [("limit", limit.to_string()), ("offset", offset.to_string())];
        let value = self.client.get_query("/decisions", &query).await?;
        Page::from_value(value, "decisions")
    }

    pub async fn fairness_metrics(&self) -> Result<FairnessMetrics> {
        self.client.get_json("/ai/metrics").await
    }

    pub async fn analyze_fairness(&self, dataset_name: &str) -> Result<FairnessAnalysis> {
        if dataset_name.trim().is_empty() {
            return Err(MonitorError::InvalidInput {
                detail: "dataset name must not be empty".into(),
            });
        }
        self.client
            .post_json(
                "/ai/analyze-fairness",
                &AnalyzeRequest { dataset_name },
                Auth::Required,
            )
            .await
    }

    pub async fn logs(&self, filter: &LogFilter, page: u32, page_size: u32) -> Result<Page<LogRecord>> {
        let offset = u64::from(page.saturating_sub(1)) * u64::from(page_size);
        let mut query = vec![
            ("limit", page_size.to_string()),
            ("offset", offset.to_string()),
            ("page", page.to_string()),
        ];
        query.extend(filter.query_pairs());
        let value = self.client.get_query("/admin/logs", &query).await?;
        Page::from_value(value, "logs")
    }

    pub async fn reports(&self, page: u32, page_size: u32) -> Result<Page<ReportRecord>> {
        let query = [("page", page.to_string()), ("pageSize", page_size.to_string())];
        let value = self.client.get_query("/admin/reports", &query).await?;
        Page::from_value(value, "reports")
    }

    pub async fn download_report(&self, report_id: &str) -> Result<Vec<u8>> {
        validate_report_id(report_id)?;
        self.client
            .get_bytes(&format!("/admin/reports/{report_id}/download"))
            .await
    }
}
