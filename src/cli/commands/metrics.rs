use crate::cli::context::{self, Session};
use crate::cli::output;
use crate::cli::views::charts::render_charts;
use crate::core::errors::Result;
use crate::core::models::chart::ChartSet;

/// Execute the `ethics-monitor metrics` command.
pub fn execute() -> Result<()> {
    let session = Session::open()?;
    session.auth.require_auth()?;

    let rt = context::runtime()?;
    let sp = output::spinner("Fetching fairness metrics...");
    let result = rt.block_on(session.feeds.fairness_metrics());
    output::clear_spinner(sp);

    let metrics = result?;
    output::header("Fairness metrics");
    println!("{}", render_charts(&ChartSet::build(&metrics, &[])));
    Ok(())
}
