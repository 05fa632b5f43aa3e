use chrono::NaiveDate;

/// Formats a feed date (`YYYY-MM-DD`) as `M/D/YYYY`.
pub fn format_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%-m/%-d/%Y").to_string(),
        Err(_) => "Invalid Date".to_string(),
    }
}
