/// Utilities for date and time formatting
///
/// Timestamps arrive as RFC 3339 strings and are shown in the browser's time zone
use chrono::{DateTime, Local, TimeZone};

/// Placeholder for absent values
pub const EMPTY_VALUE: &str = "—";

/// Format an RFC 3339 timestamp in the local time zone as DD.MM.YYYY HH:MM
/// Example: "2024-03-15T14:02:26Z" -> "15.03.2024 17:02" (UTC+3)
pub fn format_timestamp(value: Option<&str>) -> String {
    format_timestamp_in(value, &Local)
}

/// Same as [`format_timestamp`] but for an explicit time zone
///
/// Missing value -> "—", unparsable value -> the value itself
pub fn format_timestamp_in<Tz>(value: Option<&str>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return EMPTY_VALUE.to_string();
    };
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.with_timezone(tz).format("%d.%m.%Y %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_format_timestamp_utc() {
        assert_eq!(
            format_timestamp_in(Some("2024-03-15T14:02:26.123Z"), &Utc),
            "15.03.2024 14:02"
        );
        assert_eq!(
            format_timestamp_in(Some("2024-12-31T23:59:59+00:00"), &Utc),
            "31.12.2024 23:59"
        );
    }

    #[test]
    fn test_format_timestamp_shifts_zone() {
        let msk = FixedOffset::east_opt(3 * 3600).unwrap();
        assert_eq!(
            format_timestamp_in(Some("2024-12-31T22:30:00Z"), &msk),
            "01.01.2025 01:30"
        );
    }

    #[test]
    fn test_missing_and_invalid() {
        assert_eq!(format_timestamp_in(None, &Utc), "—");
        assert_eq!(format_timestamp_in(Some("  "), &Utc), "—");
        assert_eq!(format_timestamp_in(Some("yesterday"), &Utc), "yesterday");
    }
}
