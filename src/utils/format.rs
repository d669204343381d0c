use chrono::{DateTime, NaiveDate, Utc};

/// Comment timestamp as rendered beside the author,
/// e.g. "Jan 2, 2024, 05:30 PM".
pub fn comment_date(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %Y, %I:%M %p").to_string()
}

/// Post date as rendered in the listing, e.g. "January 2, 2024".
/// Front-matter dates are authored as `YYYY-MM-DD`; anything else is shown
/// as written.
pub fn post_date(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}
