//! Time related utils.

use chrono::Utc;

/// DateTime in UTC.
pub type DateTime = chrono::DateTime<Utc>;

/// Return the current UTC time.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format a time into the to-the-second ISO 8601 form the service expects.
///
/// ```text
/// 2011-08-01T19:30:00Z
/// ```
pub fn format_timestamp(t: DateTime) -> String {
    t.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_timestamp() {
        let t = Utc.with_ymd_and_hms(2011, 8, 1, 19, 30, 0).unwrap();
        assert_eq!(format_timestamp(t), "2011-08-01T19:30:00Z");
    }

    #[test]
    fn test_format_timestamp_pads_fields() {
        let t = Utc.with_ymd_and_hms(2022, 3, 3, 7, 2, 4).unwrap();
        assert_eq!(format_timestamp(t), "2022-03-03T07:02:04Z");
    }
}
