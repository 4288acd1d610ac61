/// Extract hostname from a URL string
pub fn hostname_from_url(u: &str) -> String {
    let s = u.trim();
    if s.is_empty() {
        return "".into();
    }
    let s = if let Some(idx) = s.find("://") { &s[idx+3..] } else { s };
    let host = s.split(['/', '?']).next().unwrap_or(s);
    host.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_scheme_and_path() {
        assert_eq!(hostname_from_url("https://www.wixapis.com/wix-data/v2"), "www.wixapis.com");
        assert_eq!(hostname_from_url("http://127.0.0.1:9000"), "127.0.0.1:9000");
        assert_eq!(hostname_from_url("cms.local?x=1"), "cms.local");
        assert_eq!(hostname_from_url("  "), "");
    }
}
