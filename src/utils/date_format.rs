use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Calendar date of a CMS date string, if it parses as ISO-8601.
pub fn parse_cms_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// `March 5, 2024`. Unparseable input is returned as-is; blank input is `None`.
pub fn format_long_date(raw: &str) -> Option<String> {
    format_with(raw, "%B %-d, %Y")
}

/// `3/5/2024`. Unparseable input is returned as-is; blank input is `None`.
pub fn format_short_date(raw: &str) -> Option<String> {
    format_with(raw, "%-m/%-d/%Y")
}

fn format_with(raw: &str, pattern: &str) -> Option<String> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    Some(match parse_cms_date(s) {
        Some(d) => d.format(pattern).to_string(),
        None => s.to_string(),
    })
}
