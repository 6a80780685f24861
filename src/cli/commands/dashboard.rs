use colored::Colorize;

use crate::cli::context::{self, Session};
use crate::cli::output;
use crate::cli::views::dashboard;
use crate::core::errors::Result;
use crate::core::services::refresh_controller::{DashboardController, DashboardView};

/// Execute the `ethics-monitor dashboard` command.
///
/// Renders once, or with `--watch` re-renders on the configured interval
/// until Ctrl-C, `--iterations` or the session ends.
pub fn execute(watch: bool, iterations: Option<u64>) -> Result<()> {
    let session = Session::open()?;
    session.auth.require_auth()?;
    let identity = session.auth.current_user();
    let controller = DashboardController::new(session.feeds.clone());
    let rt = context::runtime()?;

    if !watch {
        let sp = output::spinner("Loading dashboard...");
        let view = rt.block_on(controller.load());
        output::clear_spinner(sp);
        println!("{}", dashboard::render(&view, identity.as_ref()));
        return Ok(());
    }

    let period = session.config.refresh_period();
    let footer = format!("Refreshing every {}s. Press Ctrl-C to stop.", period.as_secs());

    rt.block_on(async {
        let on_view = |view: &DashboardView| {
            println!("{}", dashboard::render(view, identity.as_ref()));
            println!("  {}\n", footer.dimmed());
            // A 401 during the refresh cleared the session.
            if !session.auth.is_authenticated() {
                controller.deactivate();
            }
        };
        tokio::select! {
            _ = controller.watch(period, iterations, on_view) => {}
            _ = tokio::signal::ctrl_c() => {
                controller.deactivate();
                output::warning("Stopped watching");
            }
        }
    });
    Ok(())
}
