use tracing::warn;

use crate::cli::context::{self, Session};
use crate::cli::output;
use crate::cli::views::dashboard::decisions_table;
use crate::core::errors::{MonitorError, Result};

/// Execute the `ethics-monitor decisions` command.
pub fn execute(limit: u32, offset: u32) -> Result<()> {
    let session = Session::open()?;
    session.auth.require_auth()?;

    let rt = context::runtime()?;
    let sp = output::spinner("Fetching decisions...");
    let (result, stats) = rt.block_on(async {
        tokio::join!(
            session.feeds.decisions(limit, offset),
            session.feeds.dashboard_stats()
        )
    });
    output::clear_spinner(sp);

    let decisions = match result {
        Ok(page) => page.items,
        Err(MonitorError::Unauthorized) => return Err(MonitorError::Unauthorized),
        Err(e) => {
            warn!(feed = "decisions", error = %e.summary(), "rendering empty table");
            output::warning(&format!("Decisions unavailable: {}", e.summary()));
            Vec::new()
        }
    };

    let mut title = format!("Decisions ({} shown", decisions.len());
    if stats.total_decisions > 0 {
        title.push_str(&format!(" of {}", stats.total_decisions));
    }
    title.push_str(&format!(", offset {offset})"));
    output::header(&title);
    println!("{}", decisions_table(&decisions).render());
    Ok(())
}
