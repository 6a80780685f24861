use std::path::PathBuf;

use crate::adapters::storage::report_writer::{default_file_name, save_report};
use crate::cli::ReportAction;
use crate::cli::context::{self, Session};
use crate::cli::output;
use crate::core::errors::Result;
use crate::core::services::feed_service::validate_report_id;

/// Execute `ethics-monitor report <action>` (admin only).
pub fn execute(action: &ReportAction) -> Result<()> {
    match action {
        ReportAction::Download { id, output } => download(id, output.as_deref()),
    }
}

fn download(id: &str, output_path: Option<&str>) -> Result<()> {
    validate_report_id(id)?;
    let session = Session::open()?;
    session.auth.require_admin()?;

    let path = output_path
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(default_file_name(id)));

    let rt = context::runtime()?;
    let sp = output::spinner(&format!("Downloading report {id}..."));
    let data = match rt.block_on(session.feeds.download_report(id)) {
        Ok(data) => data,
        Err(e) => {
            output::clear_spinner(sp);
            return Err(e);
        }
    };
    let saved = save_report(&path, &data)?;
    output::finish_spinner(
        sp,
        &format!("Saved {} ({} bytes)", saved.path.display(), saved.bytes),
    );
    println!("  SHA-256: {}", saved.sha256);
    Ok(())
}
