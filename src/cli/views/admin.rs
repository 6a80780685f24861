use colored::Colorize;

use crate::cli::views::badges;
use crate::cli::views::format;
use crate::cli::views::table::{Cell, Table};
use crate::core::models::log_record::LogRecord;
use crate::core::models::report::ReportRecord;
use crate::core::services::refresh_controller::ListView;

pub const NO_LOGS: &str = "No log data found";
pub const NO_REPORTS: &str = "No reports found";

pub fn logs_table(logs: &[LogRecord]) -> Table {
    let mut table = Table::new(
        &["Time", "ID", "Level", "Source", "Message", "Hash"],
        NO_LOGS,
    );
    for log in logs {
        table.push(vec![
            Cell::plain(format::date_time(log.timestamp)),
            Cell::plain(log.id.clone()),
            badges::log_level(&log.level),
            Cell::plain(format::or_placeholder(Some(&log.source))),
            Cell::plain(format::truncate(&log.message, format::MAX_TEXT)),
            Cell::plain(format::hash_prefix(&log.hash)),
        ]);
    }
    table
}

pub fn reports_table(reports: &[ReportRecord]) -> Table {
    let mut table = Table::new(
        &["ID", "Date", "Model", "Decisions", "Bias rate", "Fairness"],
        NO_REPORTS,
    );
    for r in reports {
        table.push(vec![
            Cell::plain(r.id.clone()),
            Cell::plain(format::date(r.date)),
            Cell::plain(format::or_placeholder(Some(&r.model))),
            Cell::plain(r.decision_count.to_string()),
            badges::threshold(format::percent(r.bias_rate), r.bias_flagged()),
            badges::threshold(format!("{:.2}", r.fairness_score), r.fairness_flagged()),
        ]);
    }
    table
}

/// "Page 2 of 3 (41 entries)  --page 1 | --page 3"
pub fn pagination_line<T>(view: &ListView<T>) -> String {
    let mut line = format!("Page {}", view.current_page);
    if let Some(total_pages) = view.total_pages {
        line.push_str(&format!(" of {total_pages}"));
    }
    if let Some(total) = view.page.total {
        line.push_str(&format!(" ({total} entries)"));
    }

    let mut hints = Vec::new();
    if view.has_previous {
        hints.push(format!("previous: --page {}", view.current_page - 1));
    }
    if view.has_next {
        hints.push(format!("next: --page {}", view.current_page + 1));
    }
    if !hints.is_empty() {
        line.push_str(&format!("   {}", hints.join(" | ").dimmed()));
    }
    format!("  {line}")
}
