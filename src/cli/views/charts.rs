use colored::Colorize;

use crate::core::models::chart::{BarChart, ChartSet, TimelineBucket};
use crate::core::models::dashboard::NO_VALUE;

/// Width of a full bar, in cells.
pub const BAR_WIDTH: usize = 30;

fn bar_cells(value: f64, max: f64) -> usize {
    if max <= 0.0 || !value.is_finite() {
        return 0;
    }
    let ratio = (value / max).clamp(0.0, 1.0);
    (ratio * BAR_WIDTH as f64).round() as usize
}

fn bar(filled: usize) -> String {
    format!(
        "{}{}",
        "█".repeat(filled),
        "░".repeat(BAR_WIDTH.saturating_sub(filled)).dimmed()
    )
}

pub fn render_bar_chart(chart: &BarChart) -> String {
    let max = chart.scale_max();
    let label_width = chart
        .bars
        .iter()
        .map(|b| b.label.chars().count())
        .max()
        .unwrap_or(0);

    let mut lines = vec![format!("  {}", chart.title.bold())];
    for b in &chart.bars {
        lines.push(format!(
            "  {:<label_width$}  {} {:.2}",
            b.label,
            bar(bar_cells(b.value, max)),
            b.value
        ));
    }
    lines.join("\n")
}

pub fn render_timeline(buckets: &[TimelineBucket]) -> String {
    let mut lines = vec![format!("  {}", "Decisions per hour".bold())];
    if buckets.is_empty() {
        lines.push(format!("  {}", "No decisions in this window".dimmed()));
        return lines.join("\n");
    }
    let max = buckets.iter().map(|b| b.decisions).max().unwrap_or(0) as f64;
    for bucket in buckets {
        let local = bucket.hour.with_timezone(&chrono::Local);
        let mut line = format!(
            "  {}  {} {}",
            local.format("%H:00"),
            bar(bar_cells(f64::from(bucket.decisions), max)),
            bucket.decisions
        );
        if bucket.flagged > 0 {
            line.push_str(&format!(" ({} high risk)", bucket.flagged).red().to_string());
        }
        lines.push(line);
    }
    lines.join("\n")
}

pub fn render_charts(charts: &ChartSet) -> String {
    let risk = charts.overall_risk.as_deref().unwrap_or(NO_VALUE);
    format!(
        "{}\n  Overall risk: {}   Datasets analyzed: {}\n\n{}",
        render_bar_chart(&charts.fairness),
        risk,
        charts.datasets_analyzed,
        render_timeline(&charts.timeline)
    )
}
