//! Post date parsing and display.
//!
//! Front matter dates are ISO 8601 strings, usually full RFC 3339
//! (`2020-03-16T05:35:07.322Z`) but a bare `2020-03-16` is accepted.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Parse a front matter date into UTC.
pub fn parse_post_date(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.and_utc());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// Long display form, e.g. `March 16, 2020`. Unparsable input is returned as-is.
pub fn format_long(s: &str) -> String {
    parse_post_date(s).map_or_else(
        || s.to_owned(),
        |dt| dt.format("%B %-d, %Y").to_string(),
    )
}

/// RFC 2822 form for rss `pubDate`.
pub fn to_rfc2822(s: &str) -> Option<String> {
    parse_post_date(s).map(|dt| dt.to_rfc2822())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_rfc3339_with_millis() {
        let dt = parse_post_date("2020-03-16T05:35:07.322Z").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2020, 3, 16));
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (5, 35, 7));
    }

    #[test]
    fn test_parse_offset_is_normalized() {
        let dt = parse_post_date("2024-01-01T01:00:00+02:00").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day(), dt.hour()), (2023, 12, 31, 23));
    }

    #[test]
    fn test_parse_naive_forms() {
        assert!(parse_post_date("2024-06-15T14:30:45").is_some());
        let dt = parse_post_date("2024-06-15").unwrap();
        assert_eq!((dt.month(), dt.day(), dt.hour()), (6, 15, 0));
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_post_date("").is_none());
        assert!(parse_post_date("2024-02-30").is_none());
        assert!(parse_post_date("yesterday").is_none());
    }

    #[test]
    fn test_format_long() {
        assert_eq!(format_long("2020-03-16T05:35:07.322Z"), "March 16, 2020");
        assert_eq!(format_long("2024-01-05"), "January 5, 2024");
    }

    #[test]
    fn test_format_long_falls_back_to_raw() {
        assert_eq!(format_long("sometime in 2020"), "sometime in 2020");
    }

    #[test]
    fn test_to_rfc2822() {
        let formatted = to_rfc2822("2024-01-01").unwrap();
        assert!(formatted.starts_with("Mon, "));
        assert!(formatted.ends_with("Jan 2024 00:00:00 +0000"));
        assert!(to_rfc2822("nope").is_none());
    }
}
