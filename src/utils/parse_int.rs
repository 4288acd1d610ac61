/// Parse an optional integer from a string
pub fn parse_optional_int(value: Option<&String>) -> Option<i64> {
    value.and_then(|v| {
        let t = v.trim();
        if t.is_empty() {
            None
        } else {
            t.parse::<i64>().ok()
        }
    })
}

/// Page number from a query value: 1-based, anything missing or invalid is page 1.
/// Capped so a crafted URL cannot fan out into unbounded backend calls.
pub fn parse_page_number(value: Option<&String>, max_pages: usize) -> usize {
    match parse_optional_int(value) {
        Some(n) if n >= 1 => (n as usize).min(max_pages.max(1)),
        _ => 1,
    }
}

/// Record offset of a 1-based page. Saturates instead of overflowing.
pub fn page_offset(page: usize, limit: usize) -> usize {
    page.saturating_sub(1).saturating_mul(limit)
}
