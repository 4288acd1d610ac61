use std::env;
use std::path::Path;
use std::time::Duration;

// Default configuration constants
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_CMS_BASE_URL: &str = "https://www.wixapis.com";
pub const DEFAULT_CMS_API_TOKEN: &str = "";
pub const DEFAULT_CMS_SITE_ID: &str = "";
pub const DEFAULT_CMS_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_PUBLIC_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_SHOP_PAGE_SIZE: usize = 12;
pub const DEFAULT_CONTACT_SUBMIT_DELAY_MS: u64 = 1500;

// Page sizes for the fixed previews
pub const HOME_FEATURED_PRODUCTS_LIMIT: usize = 3;
pub const HOME_RECENT_ACTIVITIES_LIMIT: usize = 2;
pub const ABOUT_ACTIVITIES_LIMIT: usize = 50;

/// How long the contact acknowledgment stays visible after a submission.
pub const CONTACT_ACK_TTL: Duration = Duration::from_secs(5);

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_host() -> String {
    env::var("HOST")
        .map(|h| h.trim().to_string())
        .ok()
        .filter(|h| !h.is_empty())
        .unwrap_or_else(|| DEFAULT_HOST.to_string())
}

pub fn get_port() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|p| p.trim().parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT)
}

pub fn get_cms_base_url() -> String {
    sanitize_base_url(
        &env::var("CMS_BASE_URL").unwrap_or_else(|_| DEFAULT_CMS_BASE_URL.to_string()),
        DEFAULT_CMS_BASE_URL,
    )
}

pub fn get_cms_api_token() -> String {
    env::var("CMS_API_TOKEN")
        .map(|t| t.trim().to_string())
        .unwrap_or_else(|_| DEFAULT_CMS_API_TOKEN.to_string())
}

pub fn get_cms_site_id() -> String {
    env::var("CMS_SITE_ID")
        .map(|t| t.trim().to_string())
        .unwrap_or_else(|_| DEFAULT_CMS_SITE_ID.to_string())
}

pub fn get_cms_timeout() -> Duration {
    let secs = env::var("CMS_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|s| *s > 0)
        .unwrap_or(DEFAULT_CMS_TIMEOUT_SECS);
    Duration::from_secs(secs)
}

pub fn get_public_base_url() -> String {
    sanitize_base_url(
        &env::var("PUBLIC_BASE_URL").unwrap_or_else(|_| DEFAULT_PUBLIC_BASE_URL.to_string()),
        DEFAULT_PUBLIC_BASE_URL,
    )
}

pub fn get_shop_page_size() -> usize {
    env::var("SHOP_PAGE_SIZE")
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|n| *n >= 1)
        .unwrap_or(DEFAULT_SHOP_PAGE_SIZE)
}

/// Webhook that receives contact enquiries. `None` keeps the simulated submitter.
pub fn get_contact_webhook_url() -> Option<String> {
    env::var("CONTACT_WEBHOOK_URL")
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn get_contact_submit_delay() -> Duration {
    let ms = env::var("CONTACT_SUBMIT_DELAY_MS")
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_CONTACT_SUBMIT_DELAY_MS);
    Duration::from_millis(ms)
}

pub fn sanitize_base_url(raw: &str, fallback: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}
