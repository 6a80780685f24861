use colored::Colorize;

use crate::cli::views::badges;
use crate::cli::views::charts::render_charts;
use crate::cli::views::format;
use crate::cli::views::table::{Cell, Table};
use crate::core::models::dashboard::{DashboardSnapshot, NO_VALUE};
use crate::core::models::decision::DecisionRecord;
use crate::core::models::session::Identity;
use crate::core::services::refresh_controller::DashboardView;

pub const NO_DECISIONS: &str = "No decision data yet";

/// "[AD] Ada Lovelace (admin)"
pub fn user_badge(identity: &Identity) -> String {
    format!(
        "[{}] {} ({})",
        identity.initials().bold(),
        identity.display_name(),
        identity.role
    )
}

pub fn stats_block(stats: &DashboardSnapshot) -> String {
    let level = badges::bias_risk(Some(&stats.bias_level));
    let level = match level.color {
        Some(color) => level.text.color(color).to_string(),
        None if stats.bias_level.is_empty() => NO_VALUE.to_string(),
        None => stats.bias_level.clone(),
    };
    [
        format!("  Total decisions   {}", stats.total_decisions),
        format!("  Bias detected     {} ({level})", stats.bias_count),
        format!("  Fairness score    {:.2}", stats.fairness_score),
        format!("  System health     {:.0}%", stats.system_health),
    ]
    .join("\n")
}

pub fn decisions_table(decisions: &[DecisionRecord]) -> Table {
    let mut table = Table::new(
        &["Time", "ID", "Model", "Result", "Bias risk", "Status"],
        NO_DECISIONS,
    );
    for d in decisions {
        table.push(vec![
            Cell::plain(format::date_time(d.created_at)),
            Cell::plain(d.id.to_string()),
            Cell::plain(format::or_placeholder(d.model.as_deref())),
            Cell::plain(format::or_placeholder(Some(&d.decision_label))),
            badges::bias_risk(d.bias_risk.as_deref()),
            badges::decision_status(d.status.as_deref()),
        ]);
    }
    table
}

/// Full dashboard screen for one refresh.
pub fn render(view: &DashboardView, identity: Option<&Identity>) -> String {
    let mut sections = Vec::new();

    let mut title = format!("{}", "Digital Ethics Monitor".bold());
    if let Some(identity) = identity {
        title.push_str(&format!("   {}", user_badge(identity)));
    }
    sections.push(title);

    if !view.failed.is_empty() {
        let names: Vec<String> = view.failed.iter().map(ToString::to_string).collect();
        sections.push(format!(
            "  {} {}",
            "⚠".yellow(),
            format!("Showing fallback data for: {}", names.join(", ")).yellow()
        ));
    }

    sections.push(stats_block(&view.stats));
    sections.push(format!("  {}\n{}", "Recent decisions".bold(), decisions_table(&view.decisions).render()));
    sections.push(render_charts(&view.charts));
    sections.push(format!(
        "  {}",
        format!("Last update: {}", view.updated_at.format("%H:%M:%S")).dimmed()
    ));

    sections.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::analytics::FairnessMetrics;
    use crate::core::models::chart::ChartSet;
    use crate::core::services::refresh_controller::Feed;

    fn view(decisions: Vec<DecisionRecord>, failed: Vec<Feed>) -> DashboardView {
        DashboardView {
            stats: DashboardSnapshot::fallback(),
            charts: ChartSet::build(&FairnessMetrics::default(), &decisions),
            decisions,
            failed,
            updated_at: chrono::Local::now(),
        }
    }

    fn decision(id: i64) -> DecisionRecord {
        DecisionRecord {
            id,
            created_at: None,
            decision_label: "approved".into(),
            score: None,
            sensitive_attribute: None,
            owner_id: None,
            model: Some("credit-v2".into()),
            status: Some("pending".into()),
            bias_risk: Some("low".into()),
        }
    }

    #[test]
    fn fallback_stats_render_placeholders() {
        let block = stats_block(&DashboardSnapshot::fallback());
        assert!(block.contains("Total decisions   0"));
        assert!(block.contains("(--)"));
        assert!(block.contains("100%"));
    }

    #[test]
    fn empty_decisions_render_placeholder() {
        let rendered = render(&view(vec![], vec![Feed::Decisions]), None);
        assert!(rendered.contains(NO_DECISIONS));
        assert!(rendered.contains("decisions"));
        assert!(rendered.contains("Last update:"));
    }

    #[test]
    fn decisions_keep_feed_order() {
        let rendered = decisions_table(&[decision(9), decision(3), decision(5)]).render();
        let ids: Vec<String> = rendered
            .lines()
            .skip(2)
            .filter_map(|l| l.split_whitespace().nth(1).map(str::to_string))
            .collect();
        assert_eq!(ids, vec!["9", "3", "5"]);
    }

    #[test]
    fn user_badge_shows_initials_and_role() {
        let identity = Identity {
            id: 1,
            username: "ada".into(),
            email: "ada@example.org".into(),
            name: Some("Ada Lovelace".into()),
            role: "admin".into(),
        };
        let badge = user_badge(&identity);
        assert!(badge.contains("AL"));
        assert!(badge.contains("Ada Lovelace (admin)"));
    }
}
