use chrono::{DateTime, Utc};

/// Parse an RFC 3339 date string to a Unix timestamp for sorting.
/// Unparseable dates sort as the epoch.
pub fn parse_iso8601_to_timestamp(date_str: &str) -> i64 {
    if date_str.is_empty() {
        return 0;
    }

    if let Ok(dt) = date_str.parse::<DateTime<Utc>>() {
        return dt.timestamp();
    }

    0
}

pub fn normalize_tag(tag: &str) -> String {
    tag.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamps() {
        assert_eq!(parse_iso8601_to_timestamp("1970-01-01T00:01:00Z"), 60);
        assert_eq!(parse_iso8601_to_timestamp(""), 0);
        assert_eq!(parse_iso8601_to_timestamp("not a date"), 0);
    }

    #[test]
    fn tags_compare_case_insensitively() {
        assert_eq!(normalize_tag(" Rust "), normalize_tag("rust"));
    }
}
