use chrono::{NaiveDate, NaiveDateTime};

/// Converts an Odoo-style date string to a Unix epoch in seconds, UTC.
///
/// Two shapes are accepted: `YYYY-MM-DD HH:MM:SS`, and a bare `YYYY-MM-DD`,
/// which is taken as midnight UTC. Anything else yields `None`, which callers
/// must treat as "no temporal information", never as epoch zero.
pub fn to_epoch(s: &str) -> Option<i64> {
    // The length gates keep chrono from accepting unpadded components, which
    // the upstream never sends
    if s.len() == 19 {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
            .ok()
            .map(|dt| dt.and_utc().timestamp())
    } else if s.len() == 10 {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .ok()
            .map(|d| d.and_hms_opt(0, 0, 0).unwrap().and_utc().timestamp())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_datetime_as_utc() {
        assert_eq!(to_epoch("2024-01-01 00:00:00"), Some(1_704_067_200));
        assert_eq!(to_epoch("2024-01-01 01:30:05"), Some(1_704_072_605));
    }

    #[test]
    fn parses_bare_date_as_midnight_utc() {
        assert_eq!(to_epoch("2024-01-01"), Some(1_704_067_200));
        assert_eq!(to_epoch("2024-01-11"), Some(1_704_931_200));
    }

    #[test]
    fn rejects_other_shapes() {
        assert_eq!(to_epoch(""), None);
        assert_eq!(to_epoch("false"), None);
        assert_eq!(to_epoch("2024-1-1"), None);
        assert_eq!(to_epoch("01/01/2024 00:00:00"), None);
        assert_eq!(to_epoch("2024-01-01T00:00:00"), None);
        assert_eq!(to_epoch("2024-13-01 00:00:00"), None);
        assert_eq!(to_epoch("2024-01-01 00:00:00 "), None);
    }
}
