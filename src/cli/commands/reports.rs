use crate::cli::context::{self, Session};
use crate::cli::output;
use crate::cli::views::admin::{pagination_line, reports_table};
use crate::core::errors::Result;
use crate::core::services::refresh_controller::ReportsController;

/// Execute the `ethics-monitor reports` command (admin only).
pub fn execute(page: u32) -> Result<()> {
    let session = Session::open()?;
    session.auth.require_admin()?;

    let mut controller = ReportsController::new(
        session.feeds.clone(),
        session.config.pagination.reports_page_size,
    );
    controller.go_to(page);

    let rt = context::runtime()?;
    let sp = output::spinner("Fetching reports...");
    let view = rt.block_on(controller.load());
    output::clear_spinner(sp);

    output::header("Decision reports");
    if view.failed {
        output::warning("Report feed unavailable; showing no data. Run with --verbose for details.");
    }
    println!("{}", reports_table(&view.page.items).render());
    println!("{}", pagination_line(&view));
    if !view.page.is_empty() {
        println!("  Download one with: ethics-monitor report download <id>");
    }
    Ok(())
}
