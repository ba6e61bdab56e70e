//! Utility functions for `SecureCall` analytics

use chrono::{DateTime, Utc};

/// Mask a phone number, keeping only the last four digits
///
/// Produces the `****-****-1234` form used everywhere a caller is shown.
/// Numbers with fewer than four digits are masked entirely.
#[must_use]
pub fn mask_caller_id(raw: &str) -> String {
    let digits: Vec<char> = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.len() < 4 {
        return "****-****-****".to_string();
    }

    let last_four: String = digits
        .iter()
        .skip(digits.len() - 4)
        .collect();
    format!("****-****-{last_four}")
}

/// Format duration in seconds to human readable format
#[must_use]
pub fn format_duration(seconds: f64) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let total_seconds = seconds.round() as u64;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;

    if hours > 0 {
        format!("{hours:02}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes:02}:{secs:02}")
    }
}

/// Parse a `mm:ss` or `hh:mm:ss` duration string back to seconds
///
/// # Errors
///
/// Returns an error if the string is not a colon-separated duration.
pub fn parse_duration(duration: &str) -> crate::Result<f64> {
    let parts: Vec<&str> = duration.split(':').collect();

    let parsed: Option<Vec<u64>> = parts
        .iter()
        .map(|part| part.parse::<u64>().ok())
        .collect();

    let fields = parsed.ok_or_else(|| crate::Error::Validation {
        field: "duration".to_string(),
        message: format!("not a valid duration: {duration}"),
    })?;

    let seconds = match fields.as_slice() {
        [minutes, secs] => minutes * 60 + secs,
        [hours, minutes, secs] => hours * 3600 + minutes * 60 + secs,
        _ => {
            return Err(crate::Error::Validation {
                field: "duration".to_string(),
                message: format!("not a valid duration: {duration}"),
            });
        }
    };

    #[allow(clippy::cast_precision_loss)]
    Ok(seconds as f64)
}

/// Humanize a timestamp relative to `now` ("15 mins ago", "2 hours ago")
#[must_use]
pub fn format_relative(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(timestamp);
    let secs = elapsed.num_seconds();

    if secs < 60 {
        return "just now".to_string();
    }

    let minutes = elapsed.num_minutes();
    if minutes < 60 {
        return if minutes == 1 {
            "1 min ago".to_string()
        } else {
            format!("{minutes} mins ago")
        };
    }

    let hours = elapsed.num_hours();
    if hours < 24 {
        return if hours == 1 {
            "1 hour ago".to_string()
        } else {
            format!("{hours} hours ago")
        };
    }

    let days = elapsed.num_days();
    if days == 1 {
        "1 day ago".to_string()
    } else {
        format!("{days} days ago")
    }
}

/// Format a ratio as a percentage with one decimal ("8.8%")
#[must_use]
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc, clippy::float_cmp)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_mask_caller_id_keeps_last_four() {
        assert_eq!(mask_caller_id("+1 (555) 123-1234"), "****-****-1234");
        assert_eq!(mask_caller_id("5551234567"), "****-****-4567");
    }

    #[test]
    fn test_mask_caller_id_short_numbers_fully_masked() {
        assert_eq!(mask_caller_id("911"), "****-****-****");
        assert_eq!(mask_caller_id(""), "****-****-****");
    }

    #[test]
    fn test_mask_caller_id_already_masked_input() {
        assert_eq!(mask_caller_id("****-****-1234"), "****-****-1234");
    }

    #[rstest]
    #[case(0.0, "00:00")]
    #[case(5.0, "00:05")]
    #[case(263.0, "04:23")]
    #[case(401.0, "06:41")]
    #[case(3661.0, "01:01:01")]
    fn test_format_duration(#[case] seconds: f64, #[case] expected: &str) {
        assert_eq!(format_duration(seconds), expected);
    }

    #[rstest]
    #[case("04:23", 263.0)]
    #[case("00:00", 0.0)]
    #[case("01:01:01", 3661.0)]
    fn test_parse_duration(#[case] duration: &str, #[case] expected: f64) {
        assert_eq!(parse_duration(duration).unwrap(), expected);
    }

    #[test]
    fn test_parse_duration_rejects_garbage() {
        assert!(parse_duration("abc").is_err());
        assert!(parse_duration("1:2:3:4").is_err());
        assert!(parse_duration("").is_err());
    }

    #[test]
    fn test_duration_roundtrip() {
        for seconds in [0.0, 52.0, 263.0, 3661.0, 86399.0] {
            let formatted = format_duration(seconds);
            assert_eq!(parse_duration(&formatted).unwrap(), seconds);
        }
    }

    #[test]
    fn test_format_relative() {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 16, 0, 0).unwrap();

        let fifteen_mins = Utc.with_ymd_and_hms(2024, 1, 15, 15, 45, 0).unwrap();
        assert_eq!(format_relative(fifteen_mins, now), "15 mins ago");

        let two_hours = Utc.with_ymd_and_hms(2024, 1, 15, 14, 0, 0).unwrap();
        assert_eq!(format_relative(two_hours, now), "2 hours ago");

        let one_day = Utc.with_ymd_and_hms(2024, 1, 14, 16, 0, 0).unwrap();
        assert_eq!(format_relative(one_day, now), "1 day ago");

        let seconds_ago = Utc.with_ymd_and_hms(2024, 1, 15, 15, 59, 30).unwrap();
        assert_eq!(format_relative(seconds_ago, now), "just now");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(8.8), "8.8%");
        assert_eq!(format_percent(94.24), "94.2%");
        assert_eq!(format_percent(0.0), "0.0%");
    }
}
