use serde_json::Value;

use crate::cli::context::{self, Session};
use crate::cli::output;
use crate::core::errors::Result;

/// Execute the `ethics-monitor analyze <dataset>` command.
pub fn execute(dataset: &str) -> Result<()> {
    let session = Session::open()?;
    session.auth.require_auth()?;

    let rt = context::runtime()?;
    let sp = output::spinner(&format!("Analyzing '{dataset}'..."));
    let analysis = match rt.block_on(session.feeds.analyze_fairness(dataset)) {
        Ok(analysis) => analysis,
        Err(e) => {
            output::clear_spinner(sp);
            return Err(e);
        }
    };
    output::finish_spinner(sp, &format!("Analysis of '{dataset}' complete"));

    if !analysis.explanation.is_empty() {
        output::header("Explanation");
        println!("  {}", analysis.explanation);
    }
    print_section("Metrics", &analysis.metrics);
    print_section("Risk analysis", &analysis.risk_analysis);
    Ok(())
}

fn print_section(title: &str, value: &Value) {
    if value.is_null() {
        return;
    }
    output::header(title);
    let pretty = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
    for line in pretty.lines() {
        println!("  {line}");
    }
}
