use crate::cli::context::{self, Session};
use crate::cli::output;
use crate::core::errors::Result;

/// Execute the `ethics-monitor logout` command.
pub fn execute() -> Result<()> {
    let session = Session::open()?;
    if !session.auth.is_authenticated() && session.auth.current_user().is_none() {
        output::warning("Not logged in");
        return Ok(());
    }

    let rt = context::runtime()?;
    rt.block_on(session.auth.logout())?;
    output::success("Session cleared");
    Ok(())
}
