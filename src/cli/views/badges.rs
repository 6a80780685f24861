use colored::Color;

use crate::cli::views::table::Cell;
use crate::core::models::dashboard::NO_VALUE;

/// Bias risk of a decision, or the dashboard bias level.
pub fn bias_risk(risk: Option<&str>) -> Cell {
    match risk.map(str::to_ascii_lowercase).as_deref() {
        Some("low") => Cell::colored("LOW", Color::Green),
        Some("medium") => Cell::colored("MEDIUM", Color::Yellow),
        Some("high") => Cell::colored("HIGH", Color::Red),
        _ => Cell::plain(NO_VALUE),
    }
}

pub fn decision_status(status: Option<&str>) -> Cell {
    let Some(status) = status.filter(|s| !s.is_empty()) else {
        return Cell::plain(NO_VALUE);
    };
    let color = match status.to_ascii_lowercase().as_str() {
        "approved" => Color::Green,
        "pending" => Color::Yellow,
        "rejected" => Color::Red,
        _ => Color::Cyan,
    };
    Cell::colored(status, color)
}

pub fn log_level(level: &str) -> Cell {
    let color = match level.to_ascii_lowercase().as_str() {
        "warning" | "warn" => Color::Yellow,
        "error" | "critical" => Color::Red,
        _ => Color::Cyan,
    };
    Cell::colored(level.to_uppercase(), color)
}

/// Red when `flagged`, green otherwise.
pub fn threshold(text: String, flagged: bool) -> Cell {
    Cell::colored(text, if flagged { Color::Red } else { Color::Green })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bias_risk_levels() {
        assert_eq!(bias_risk(Some("high")).color, Some(Color::Red));
        assert_eq!(bias_risk(Some("Medium")).text, "MEDIUM");
        assert_eq!(bias_risk(Some("unknown")).text, "--");
        assert_eq!(bias_risk(None).color, None);
    }

    #[test]
    fn status_colours() {
        assert_eq!(decision_status(Some("approved")).color, Some(Color::Green));
        assert_eq!(decision_status(Some("rejected")).color, Some(Color::Red));
        assert_eq!(decision_status(Some("escalated")).color, Some(Color::Cyan));
        assert_eq!(decision_status(None).text, "--");
    }

    #[test]
    fn log_level_is_uppercased() {
        let cell = log_level("critical");
        assert_eq!(cell.text, "CRITICAL");
        assert_eq!(cell.color, Some(Color::Red));
        assert_eq!(log_level("info").color, Some(Color::Cyan));
    }
}
