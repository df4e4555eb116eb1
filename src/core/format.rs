//! Display formatting shared by the UI and the filter engine.
//!
//! The created-date filter matches against the *displayed* string, so the
//! filter engine and every rendering site must go through the same functions
//! here — a format change in one place changes both, by construction.

use chrono::{DateTime, Utc};

/// Formats a timestamp as the display date, `YYYY-MM-DD`.
#[must_use]
pub fn format_date(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d").to_string()
}

/// Formats a timestamp with the time component, `YYYY-MM-DD HH:MM`.
#[must_use]
pub fn format_datetime(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M").to_string()
}

/// Formats a monetary value with a currency prefix, e.g. `$35.00`.
#[must_use]
pub fn display_number(value: f64, unit: &str) -> String {
    format!("{unit}{value:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_date() {
        let timestamp = Utc.with_ymd_and_hms(2024, 1, 5, 9, 30, 0).unwrap();
        assert_eq!(format_date(&timestamp), "2024-01-05");
    }

    #[test]
    fn test_format_datetime() {
        let timestamp = Utc.with_ymd_and_hms(2024, 1, 5, 9, 30, 0).unwrap();
        assert_eq!(format_datetime(&timestamp), "2024-01-05 09:30");
    }

    #[test]
    fn test_display_number() {
        assert_eq!(display_number(35.0, "$"), "$35.00");
        assert_eq!(display_number(12.345, "$"), "$12.35");
    }
}
