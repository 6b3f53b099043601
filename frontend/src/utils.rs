pub fn format_iso8601_date(iso_date: &str) -> String {
    if let Ok(datetime) = iso_date.parse::<chrono::DateTime<chrono::Utc>>() {
        datetime.format("%Y-%m-%d").to_string()
    } else {
        iso_date.to_string()
    }
}

// Formats each x1000 step
pub fn format_number(number: i64) -> String {
    let num_str = number.to_string();
    let mut result = String::new();
    let len = num_str.len();

    for (i, c) in num_str.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

pub fn format_time_since(iso_date: &str) -> String {
    let date = match iso_date.parse::<chrono::DateTime<chrono::Utc>>() {
        Ok(d) => d,
        Err(_) => return iso_date.to_string(),
    };

    let duration = chrono::Utc::now().signed_duration_since(date);
    let seconds = duration.num_seconds();

    if seconds < 60 {
        return format!("{}s ago", seconds.max(0));
    }

    let minutes = seconds / 60;
    if minutes < 60 {
        return format!("{}m ago", minutes);
    }

    let hours = minutes / 60;
    if hours < 24 {
        let remaining_minutes = minutes % 60;
        return format!("{}h {}m ago", hours, remaining_minutes);
    }

    let days = hours / 24;
    let remaining_hours = hours % 24;
    format!("{}d {}h ago", days, remaining_hours)
}

pub fn video_thumbnail_url(video_id: &str) -> String {
    format!("https://i.ytimg.com/vi/{}/hqdefault.jpg", video_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_iso_dates() {
        assert_eq!(format_iso8601_date("2025-03-14T09:26:53Z"), "2025-03-14");
        // Unparseable input is passed through untouched.
        assert_eq!(format_iso8601_date("yesterday"), "yesterday");
    }

    #[test]
    fn formats_thousands_separators() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn time_since_falls_back_on_bad_input() {
        assert_eq!(format_time_since("not a date"), "not a date");
    }

    #[test]
    fn time_since_formats_old_dates_in_days() {
        let formatted = format_time_since("2000-01-01T00:00:00Z");
        assert!(formatted.ends_with("ago"), "got: {formatted}");
        assert!(formatted.contains('d'), "got: {formatted}");
    }

    #[test]
    fn builds_thumbnail_urls() {
        assert_eq!(
            video_thumbnail_url("dQw4w9WgXcQ"),
            "https://i.ytimg.com/vi/dQw4w9WgXcQ/hqdefault.jpg"
        );
    }
}
