use chrono::NaiveDate;

use crate::cli::context::{self, Session};
use crate::cli::output;
use crate::cli::views::admin::{logs_table, pagination_line};
use crate::core::errors::{MonitorError, Result};
use crate::core::models::log_record::LogFilter;
use crate::core::services::refresh_controller::LogsController;

/// Options of the `logs` command.
#[derive(Debug, Default)]
pub struct LogsArgs<'a> {
    pub page: u32,
    pub level: Option<&'a str>,
    pub since: Option<&'a str>,
    pub until: Option<&'a str>,
    pub search: Option<&'a str>,
}

/// Execute the `ethics-monitor logs` command (admin only).
pub fn execute(args: &LogsArgs<'_>) -> Result<()> {
    let session = Session::open()?;
    session.auth.require_admin()?;

    let filter = LogFilter {
        level: args.level.map(str::to_ascii_lowercase),
        start_date: args.since.map(parse_date).transpose()?,
        end_date: args.until.map(parse_date).transpose()?,
        search: args.search.map(str::to_string),
    };
    if let (Some(start), Some(end)) = (filter.start_date, filter.end_date)
        && start > end
    {
        return Err(MonitorError::InvalidInput {
            detail: format!("--since {start} is after --until {end}"),
        });
    }

    let mut controller = LogsController::new(
        session.feeds.clone(),
        session.config.pagination.logs_page_size,
    )
    .with_filter(filter);
    controller.go_to(args.page);

    let rt = context::runtime()?;
    let sp = output::spinner("Fetching audit log...");
    let view = rt.block_on(controller.load());
    output::clear_spinner(sp);

    output::header("Audit log");
    if view.failed {
        output::warning("Log feed unavailable; showing no data. Run with --verbose for details.");
    }
    println!("{}", logs_table(&view.page.items).render());
    println!("{}", pagination_line(&view));
    Ok(())
}

/// Parse an ISO 8601 date (`YYYY-MM-DD`).
fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| MonitorError::InvalidInput {
        detail: format!("Invalid date format: '{s}'. Expected ISO 8601 (YYYY-MM-DD), e.g. 2026-01-15"),
    })
}
