use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use chrono::{DateTime, Local};
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, warn};

use crate::core::models::analytics::FairnessMetrics;
use crate::core::models::chart::ChartSet;
use crate::core::models::dashboard::DashboardSnapshot;
use crate::core::models::decision::DecisionRecord;
use crate::core::models::log_record::{LogFilter, LogRecord};
use crate::core::models::page::Page;
use crate::core::models::report::ReportRecord;
use crate::core::services::feed_service::FeedService;
use crate::core::services::pagination::Pager;

/// Default period of the dashboard refresh timer.
pub const DEFAULT_REFRESH_PERIOD: Duration = Duration::from_secs(30);

/// Number of decisions shown in the recent decisions table.
pub const RECENT_DECISIONS: u32 = 10;

/// Feeds rendered on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feed {
    Stats,
    Decisions,
    Analytics,
}

impl std::fmt::Display for Feed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Feed::Stats => write!(f, "stats"),
            Feed::Decisions => write!(f, "decisions"),
            Feed::Analytics => write!(f, "analytics"),
        }
    }
}

/// One rendering of the dashboard; each region holds data or its fallback.
#[derive(Debug, Clone)]
pub struct DashboardView {
    pub stats: DashboardSnapshot,
    pub decisions: Vec<DecisionRecord>,
    pub charts: ChartSet,
    /// Feeds that fell back during this load.
    pub failed: Vec<Feed>,
    pub updated_at: DateTime<Local>,
}

/// Clears the in-flight flag when a refresh ends, however it ends.
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn begin(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Controller for the dashboard view: initial load plus periodic refresh.
///
/// Lives as long as the view; `deactivate` stops the timer loop.
pub struct DashboardController {
    feeds: FeedService,
    charts: Mutex<Option<ChartSet>>,
    active: AtomicBool,
    in_flight: AtomicBool,
}

impl DashboardController {
    pub fn new(feeds: FeedService) -> Self {
        Self {
            feeds,
            charts: Mutex::new(None),
            active: AtomicBool::new(true),
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    pub fn deactivate(&self) {
        self.active.store(false, Ordering::Release);
    }

    /// Charts from the latest load, if any.
    pub fn charts(&self) -> Option<ChartSet> {
        self.charts.lock().ok().and_then(|c| c.clone())
    }

    /// Fetch every dashboard feed concurrently; a failing feed falls back
    /// without affecting the others.
    pub async fn load(&self) -> DashboardView {
        let (stats, decisions, metrics) = tokio::join!(
            self.feeds.try_dashboard_stats(),
            self.feeds.decisions(RECENT_DECISIONS, 0),
            self.feeds.fairness_metrics(),
        );

        let mut failed = Vec::new();
        let stats = stats.unwrap_or_else(|e| {
            fallback(Feed::Stats, &e, &mut failed);
            DashboardSnapshot::fallback()
        });
        let decisions = decisions.map(|p| p.items).unwrap_or_else(|e| {
            fallback(Feed::Decisions, &e, &mut failed);
            Vec::new()
        });
        let metrics = metrics.unwrap_or_else(|e| {
            fallback(Feed::Analytics, &e, &mut failed);
            FairnessMetrics::default()
        });

        let charts = self.rebuild_charts(&metrics, &decisions);

        DashboardView {
            stats,
            decisions,
            charts,
            failed,
            updated_at: Local::now(),
        }
    }

    /// Drop the previous chart set before building the new one.
    fn rebuild_charts(&self, metrics: &FairnessMetrics, decisions: &[DecisionRecord]) -> ChartSet {
        let mut slot = self
            .charts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        drop(slot.take());
        let charts = ChartSet::build(metrics, decisions);
        *slot = Some(charts.clone());
        charts
    }

    /// One timer tick. Skipped (returns `None`) while the view is inactive
    /// or the previous refresh has not finished.
    pub async fn refresh(&self) -> Option<DashboardView> {
        if !self.is_active() {
            return None;
        }
        let Some(_guard) = InFlight::begin(&self.in_flight) else {
            debug!("previous refresh still running, skipping tick");
            return None;
        };
        Some(self.load().await)
    }

    /// Load now, then every `period` until deactivated or `iterations`
    /// renderings have been produced.
    pub async fn watch<F>(&self, period: Duration, iterations: Option<u64>, mut on_view: F)
    where
        F: FnMut(&DashboardView),
    {
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut rendered = 0u64;

        while self.is_active() {
            ticker.tick().await;
            if let Some(view) = self.refresh().await {
                on_view(&view);
                rendered += 1;
                if iterations.is_some_and(|n| rendered >= n) {
                    break;
                }
            }
        }
    }
}

fn fallback(feed: Feed, err: &crate::core::errors::MonitorError, failed: &mut Vec<Feed>) {
    warn!(%feed, error = %err.summary(), "feed failed, rendering fallback");
    failed.push(feed);
}

/// Rows of one list view page; `failed` marks a fallback rendering.
#[derive(Debug, Clone)]
pub struct ListView<T> {
    pub page: Page<T>,
    pub current_page: u32,
    /// Known from the feed's paging fields, if it sent any.
    pub total_pages: Option<u32>,
    pub has_previous: bool,
    pub has_next: bool,
    pub failed: bool,
}

/// Controller for the admin log view.
pub struct LogsController {
    feeds: FeedService,
    pager: Pager,
    filter: LogFilter,
}

impl LogsController {
    pub fn new(feeds: FeedService, page_size: u32) -> Self {
        Self {
            feeds,
            pager: Pager::new(page_size),
            filter: LogFilter::default(),
        }
    }

    /// Start with `filter` already applied, without fetching.
    pub fn with_filter(mut self, filter: LogFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    pub fn filter(&self) -> &LogFilter {
        &self.filter
    }

    pub fn go_to(&mut self, page: u32) {
        self.pager.go_to(page);
    }

    /// Fetch the current page; on failure render an empty page.
    pub async fn load(&mut self) -> ListView<LogRecord> {
        let result = self
            .feeds
            .logs(&self.filter, self.pager.current_page(), self.pager.page_size())
            .await;
        list_view(&mut self.pager, result, "logs")
    }

    pub async fn next_page(&mut self) -> ListView<LogRecord> {
        self.pager.next();
        self.load().await
    }

    pub async fn previous_page(&mut self) -> ListView<LogRecord> {
        self.pager.previous();
        self.load().await
    }

    /// Replace the filters and start again from page 1.
    pub async fn apply_filters(&mut self, filter: LogFilter) -> ListView<LogRecord> {
        self.filter = filter;
        self.pager.reset();
        self.load().await
    }
}

/// Controller for the admin report view.
pub struct ReportsController {
    feeds: FeedService,
    pager: Pager,
}

impl ReportsController {
    pub fn new(feeds: FeedService, page_size: u32) -> Self {
        Self {
            feeds,
            pager: Pager::new(page_size),
        }
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    pub fn go_to(&mut self, page: u32) {
        self.pager.go_to(page);
    }

    pub async fn load(&mut self) -> ListView<ReportRecord> {
        let result = self
            .feeds
            .reports(self.pager.current_page(), self.pager.page_size())
            .await;
        list_view(&mut self.pager, result, "reports")
    }

    pub async fn next_page(&mut self) -> ListView<ReportRecord> {
        self.pager.next();
        self.load().await
    }

    pub async fn previous_page(&mut self) -> ListView<ReportRecord> {
        self.pager.previous();
        self.load().await
    }
}

fn list_view<T>(
    pager: &mut Pager,
    result: crate::core::errors::Result<Page<T>>,
    feed: &str,
) -> ListView<T> {
    let (page, failed) = match result {
        Ok(page) => {
            pager.observe(&page);
            (page, false)
        }
        Err(e) => {
            warn!(feed, error = %e.summary(), "feed failed, rendering empty page");
            (Page::empty(), true)
        }
    };
    ListView {
        page,
        current_page: pager.current_page(),
        total_pages: pager.total_pages(),
        has_previous: pager.has_previous(),
        has_next: pager.has_next(),
        failed,
    }
}
