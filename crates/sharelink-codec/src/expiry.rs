//! Human-readable expiry rendering.

use chrono::Utc;

use crate::data::MS_PER_HOUR;

const MS_PER_DAY: i64 = 86_400_000;
const MS_PER_MINUTE: i64 = 60_000;

/// Render "time until expiry" for display.
///
/// Day/hour/minute counts are naive truncated divisions of the
/// millisecond difference, with no calendar-aware rounding.
pub fn format_expires_at(expires_at_ms: i64) -> String {
    format_expires_at_from(expires_at_ms, Utc::now().timestamp_millis())
}

/// [`format_expires_at`] against an explicit "now" instant.
pub fn format_expires_at_from(expires_at_ms: i64, now_ms: i64) -> String {
    let remaining = expires_at_ms - now_ms;
    if remaining < 0 {
        return "Expired".to_string();
    }

    let days = remaining / MS_PER_DAY;
    if days > 0 {
        return format!("Expires in {days} day{}", plural(days));
    }
    let hours = remaining / MS_PER_HOUR;
    if hours > 0 {
        return format!("Expires in {hours} hour{}", plural(hours));
    }
    let minutes = remaining / MS_PER_MINUTE;
    if minutes > 0 {
        return format!("Expires in {minutes} minute{}", plural(minutes));
    }
    "Expires in less than a minute".to_string()
}

fn plural(count: i64) -> &'static str {
    if count == 1 { "" } else { "s" }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000_000;

    #[test]
    fn test_days_message() {
        assert_eq!(
            format_expires_at_from(NOW + 2 * MS_PER_DAY, NOW),
            "Expires in 2 days"
        );
    }

    #[test]
    fn test_singular_day() {
        assert_eq!(
            format_expires_at_from(NOW + MS_PER_DAY + MS_PER_HOUR, NOW),
            "Expires in 1 day"
        );
    }

    #[test]
    fn test_hours_message() {
        assert_eq!(
            format_expires_at_from(NOW + 5 * MS_PER_HOUR, NOW),
            "Expires in 5 hours"
        );
    }

    #[test]
    fn test_minutes_message() {
        assert_eq!(
            format_expires_at_from(NOW + 30 * MS_PER_MINUTE, NOW),
            "Expires in 30 minutes"
        );
    }

    #[test]
    fn test_sub_minute_message() {
        assert_eq!(
            format_expires_at_from(NOW + 30_000, NOW),
            "Expires in less than a minute"
        );
    }

    #[test]
    fn test_past_instant_is_expired() {
        assert_eq!(format_expires_at_from(NOW - 1000, NOW), "Expired");
    }
}
