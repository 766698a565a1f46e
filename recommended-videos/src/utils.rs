use chrono::{DateTime, Utc};

pub fn format_published_date(iso_date: &str) -> String {
    if let Ok(datetime) = iso_date.parse::<DateTime<Utc>>() {
        datetime.format("%Y-%m-%d").to_string()
    } else {
        iso_date.to_string()
    }
}

// Formats each x1000 step
pub fn format_number(number: i64) -> String {
    let num_str = number.unsigned_abs().to_string();
    let mut result = String::new();
    let len = num_str.len();

    if number < 0 {
        result.push('-');
    }
    for (i, c) in num_str.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

pub fn format_views(views: i64) -> String {
    if views == 1 {
        "1 view".to_string()
    } else {
        format!("{} views", format_number(views))
    }
}

pub fn format_duration(seconds: i64) -> String {
    let seconds = seconds.max(0);
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let remaining_seconds = seconds % 60;
    if hours != 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, remaining_seconds)
    } else {
        format!("{:02}:{:02}", minutes, remaining_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_grouped_by_thousands() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
        assert_eq!(format_number(-1234), "-1,234");
        assert_eq!(format_number(i64::MIN), "-9,223,372,036,854,775,808");
    }

    #[test]
    fn views_label() {
        assert_eq!(format_views(1), "1 view");
        assert_eq!(format_views(12000), "12,000 views");
    }

    #[test]
    fn durations() {
        assert_eq!(format_duration(59), "00:59");
        assert_eq!(format_duration(61), "01:01");
        assert_eq!(format_duration(3723), "01:02:03");
    }

    #[test]
    fn published_date_falls_back_to_raw_text() {
        assert_eq!(format_published_date("2024-03-05T10:00:00Z"), "2024-03-05");
        assert_eq!(format_published_date("yesterday"), "yesterday");
    }
}
