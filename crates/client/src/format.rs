//! Formatting utilities for human-readable output.
//!
//! Pure functions converting raw backend values (costs, ISO timestamps,
//! fractions) into display strings. None of them fail: unusable input falls
//! back to a placeholder or to the raw value.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

/// Placeholder shown wherever a value is missing or unusable.
pub const PLACEHOLDER: &str = "—";

/// Format a USD amount.
///
/// Sub-dollar amounts keep four decimals because per-agent evaluation costs
/// are usually fractions of a cent.
///
/// # Examples
///
/// ```
/// use evaldash_client::format::format_currency;
///
/// assert_eq!(format_currency(0.002), "$0.0020");
/// assert_eq!(format_currency(12.5), "$12.50");
/// assert_eq!(format_currency(-0.25), "-$0.2500");
/// ```
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "$0.00".to_string();
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    let abs = amount.abs();
    if abs < 1.0 {
        format!("{sign}${abs:.4}")
    } else {
        format!("{sign}${abs:.2}")
    }
}

/// Format an ISO 8601 timestamp as `YYYY-MM-DD HH:MM`.
///
/// Timestamps carrying an offset are converted to UTC. Input that cannot be
/// parsed is returned unchanged; an empty string becomes `"N/A"`.
///
/// # Examples
///
/// ```
/// use evaldash_client::format::format_timestamp;
///
/// assert_eq!(format_timestamp("2025-01-15T10:30:00Z"), "2025-01-15 10:30");
/// assert_eq!(format_timestamp("2025-01-15T10:30:00.123456"), "2025-01-15 10:30");
/// assert_eq!(format_timestamp("yesterday"), "yesterday");
/// ```
pub fn format_timestamp(raw: &str) -> String {
    const OUTPUT: &str = "%Y-%m-%d %H:%M";

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return "N/A".to_string();
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return dt.with_timezone(&Utc).format(OUTPUT).to_string();
    }
    if let Ok(naive) = trimmed.parse::<NaiveDateTime>() {
        return naive.format(OUTPUT).to_string();
    }
    if let Ok(date) = trimmed.parse::<NaiveDate>() {
        return date.format("%Y-%m-%d").to_string();
    }

    raw.to_string()
}

/// Format a fraction (0.0..=1.0) as a percentage with one decimal.
///
/// ```
/// use evaldash_client::format::format_percentage;
///
/// assert_eq!(format_percentage(0.853), "85.3%");
/// ```
pub fn format_percentage(fraction: f64) -> String {
    if !fraction.is_finite() {
        return "N/A".to_string();
    }
    format!("{:.1}%", fraction * 100.0)
}

/// Format a duration given in seconds.
pub fn format_duration_secs(secs: f64) -> String {
    if !secs.is_finite() || secs < 0.0 {
        return "N/A".to_string();
    }
    if secs < 60.0 {
        return format!("{secs:.1}s");
    }
    let whole = secs.round() as u64;
    format!("{}m {:02}s", whole / 60, whole % 60)
}

/// Render any envelope leaf for display, falling back to [`PLACEHOLDER`].
pub fn display_or_placeholder(value: &Value) -> String {
    match value {
        Value::Null => PLACEHOLDER.to_string(),
        Value::String(s) if s.trim().is_empty() => PLACEHOLDER.to_string(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => if *b { "yes" } else { "no" }.to_string(),
        Value::Array(items) => format!("{} items", items.len()),
        Value::Object(_) => PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_currency_small_amounts() {
        assert_eq!(format_currency(0.0), "$0.0000");
        assert_eq!(format_currency(0.002), "$0.0020");
        assert_eq!(format_currency(0.99999), "$1.0000");
    }

    #[test]
    fn test_format_currency_large_amounts() {
        assert_eq!(format_currency(1.0), "$1.00");
        assert_eq!(format_currency(1234.567), "$1234.57");
    }

    #[test]
    fn test_format_currency_non_finite() {
        assert_eq!(format_currency(f64::NAN), "$0.00");
        assert_eq!(format_currency(f64::INFINITY), "$0.00");
    }

    #[test]
    fn test_format_timestamp_with_offset_converts_to_utc() {
        assert_eq!(format_timestamp("2025-01-15T10:30:00+02:00"), "2025-01-15 08:30");
    }

    #[test]
    fn test_format_timestamp_naive() {
        assert_eq!(format_timestamp("2025-01-15T10:30:45"), "2025-01-15 10:30");
    }

    #[test]
    fn test_format_timestamp_date_only() {
        assert_eq!(format_timestamp("2025-01-15"), "2025-01-15");
    }

    #[test]
    fn test_format_timestamp_fallbacks() {
        assert_eq!(format_timestamp(""), "N/A");
        assert_eq!(format_timestamp("   "), "N/A");
        assert_eq!(format_timestamp("not a date"), "not a date");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.0), "0.0%");
        assert_eq!(format_percentage(1.0), "100.0%");
        assert_eq!(format_percentage(f64::NAN), "N/A");
    }

    #[test]
    fn test_format_duration_secs() {
        assert_eq!(format_duration_secs(42.0), "42.0s");
        assert_eq!(format_duration_secs(65.0), "1m 05s");
        assert_eq!(format_duration_secs(-1.0), "N/A");
    }

    #[test]
    fn test_display_or_placeholder() {
        assert_eq!(display_or_placeholder(&json!(null)), PLACEHOLDER);
        assert_eq!(display_or_placeholder(&json!("")), PLACEHOLDER);
        assert_eq!(display_or_placeholder(&json!("alpha")), "alpha");
        assert_eq!(display_or_placeholder(&json!(3)), "3");
        assert_eq!(display_or_placeholder(&json!(true)), "yes");
        assert_eq!(display_or_placeholder(&json!([1, 2])), "2 items");
        assert_eq!(display_or_placeholder(&json!({"a": 1})), PLACEHOLDER);
    }
}
