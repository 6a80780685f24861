use crate::cli::ConfigAction;
use crate::cli::context;
use crate::cli::output;
use crate::core::errors::Result;

/// Execute `ethics-monitor config <action>`.
pub fn execute(action: &ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => show(),
    }
}

fn show() -> Result<()> {
    let config = context::load_config()?;
    let config_file = context::state_dir().join("config.toml");

    output::header("ethics-monitor configuration");
    println!(
        "  Config file:      {}{}",
        config_file.display(),
        if config_file.exists() { "" } else { " (not found, using defaults)" }
    );
    println!("  Durable session:  {}", context::durable_session_path().display());
    println!("  Volatile session: {}", context::volatile_session_path().display());
    println!();
    println!("  api.base_url                  {}", config.api.base_url);
    println!("  api.timeout_secs              {}", config.api.timeout_secs);
    println!("  refresh.interval_secs         {}", config.refresh.interval_secs);
    println!("  pagination.logs_page_size     {}", config.pagination.logs_page_size);
    println!("  pagination.reports_page_size  {}", config.pagination.reports_page_size);
    if context::api_url_override().is_some() {
        println!();
        println!("  (api.base_url overridden by --api-url / ETHICS_MONITOR_API_URL)");
    }
    Ok(())
}
