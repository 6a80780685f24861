use chrono::{DateTime, Local, NaiveDate, Utc};

use crate::core::models::dashboard::NO_VALUE;

/// Longest message shown in a table cell.
pub const MAX_TEXT: usize = 50;

/// Characters of a log hash shown in tables.
pub const HASH_PREFIX: usize = 8;

/// Cut `text` to `max` characters and mark the cut with `...`.
pub fn truncate(text: &str, max: usize) -> String {
    if text.is_empty() {
        return NO_VALUE.to_string();
    }
    if text.chars().count() <= max {
        return text.to_string();
    }
    let head: String = text.chars().take(max).collect();
    format!("{head}...")
}

pub fn hash_prefix(hash: &str) -> String {
    if hash.is_empty() {
        return NO_VALUE.to_string();
    }
    let head: String = hash.chars().take(HASH_PREFIX).collect();
    format!("{head}...")
}

/// Timestamp in local time, or `--`.
pub fn date_time(ts: Option<DateTime<Utc>>) -> String {
    ts.map(|t| t.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| NO_VALUE.to_string())
}

pub fn date(d: Option<NaiveDate>) -> String {
    d.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| NO_VALUE.to_string())
}

/// Ratio as a percentage with one decimal.
pub fn percent(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

pub fn or_placeholder(value: Option<&str>) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or(NO_VALUE)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate("model retrained", MAX_TEXT), "model retrained");
    }

    #[test]
    fn truncate_cuts_at_fifty_chars() {
        let long = "x".repeat(60);
        let cut = truncate(&long, MAX_TEXT);
        assert_eq!(cut.len(), 53);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn truncate_counts_chars_not_bytes() {
        let text = "ğ".repeat(50);
        assert_eq!(truncate(&text, MAX_TEXT), text);
    }

    #[test]
    fn empty_text_is_placeholder() {
        assert_eq!(truncate("", MAX_TEXT), "--");
        assert_eq!(hash_prefix(""), "--");
    }

    #[test]
    fn hash_shows_first_eight() {
        assert_eq!(hash_prefix("a1b2c3d4e5f6"), "a1b2c3d4...");
    }

    #[test]
    fn missing_timestamp_is_placeholder() {
        assert_eq!(date_time(None), "--");
        assert_eq!(date(None), "--");
    }

    #[test]
    fn percent_has_one_decimal() {
        assert_eq!(percent(0.123), "12.3%");
        assert_eq!(percent(0.0), "0.0%");
    }
}
