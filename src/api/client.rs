use serde_json::Value;
use yansi::Paint;
use std::sync::atomic::{AtomicBool, Ordering};

use super::error::ContentError;

static SILENT: AtomicBool = AtomicBool::new(false);

pub fn set_silent(silent: bool) {
    SILENT.store(silent, Ordering::Relaxed);
}

fn log_output(msg: String) {
    if !SILENT.load(Ordering::Relaxed) {
        println!("{}", msg);
    }
}

/// Connection settings for the content service.
#[derive(Clone, Debug)]
pub struct CmsConnection {
    pub base_url: String,
    pub api_token: String,
    pub site_id: String,
}

/// Raw response from the content service: HTTP status and the parsed JSON body
/// (`Value::Null` when the body is empty or not JSON).
#[derive(Debug)]
pub struct RawResponse {
    pub status: u16,
    pub body: Value,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

fn curl_line(
    conn: &CmsConnection,
    method: &str,
    url_for_log: &str,
    body: Option<&Value>,
) -> String {
    let mut parts = Vec::new();
    parts.push(Paint::new("curl").fg(yansi::Color::Green).bold().to_string());
    parts.push(format!("-X {}", Paint::new(method).fg(yansi::Color::Yellow).bold()));
    parts.push(format!("'{}'", Paint::new(url_for_log).fg(yansi::Color::Cyan)));

    // Never echo the token itself.
    if !conn.api_token.is_empty() {
        parts.push(format!("{} {}",
            Paint::new("-H").fg(yansi::Color::Magenta),
            Paint::new("'Authorization: ***'").fg(yansi::Color::Magenta)
        ));
    }
    if !conn.site_id.is_empty() {
        parts.push(format!("{} {}",
            Paint::new("-H").fg(yansi::Color::Magenta),
            Paint::new(format!("'wix-site-id: {}'", conn.site_id)).fg(yansi::Color::Magenta)
        ));
    }
    if let Some(d) = body {
        parts.push(format!("{} {}",
            Paint::new("-H").fg(yansi::Color::Magenta),
            Paint::new("'Content-Type: application/json'").fg(yansi::Color::Magenta)
        ));
        let json_str = serde_json::to_string(d).unwrap_or_default();
        let escaped_json = json_str.replace('\'', "'\\''");
        parts.push(format!("{} {}",
            Paint::new("-d").fg(yansi::Color::Blue),
            Paint::new(format!("'{}'", escaped_json)).fg(yansi::Color::White)
        ));
    }
    parts.join(" ")
}

/// Core HTTP function for content service calls.
/// Handles authentication headers, request echo and status capture; interpreting
/// the body is left to the caller.
pub async fn cms_call(
    client: &reqwest::Client,
    conn: &CmsConnection,
    method: &str,
    endpoint: &str,
    body: Option<Value>,
    params: Option<Vec<(String, String)>>,
) -> Result<RawResponse, ContentError> {
    let url = format!("{}{}", conn.base_url, endpoint);

    let mut url_for_log = url.clone();
    if let Some(ref p) = params {
        if !p.is_empty() {
            let query_string = p.iter()
                .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
                .collect::<Vec<String>>()
                .join("&");
            url_for_log = format!("{}?{}", url_for_log, query_string);
        }
    }
    log_output(format!("Request:\n{}", curl_line(conn, method, &url_for_log, body.as_ref())));
    tracing::debug!(method, url = %url_for_log, "CMS request");

    let mut req = match method {
        "POST" => client.post(&url),
        _ => client.get(&url),
    };
    if !conn.api_token.is_empty() {
        req = req.header(reqwest::header::AUTHORIZATION, conn.api_token.as_str());
    }
    if !conn.site_id.is_empty() {
        req = req.header("wix-site-id", conn.site_id.as_str());
    }
    if let Some(ref p) = params {
        req = req.query(p);
    }
    if let Some(ref b) = body {
        req = req.json(b);
    }

    let resp = match req.send().await {
        Ok(r) => r,
        Err(e) => {
            log_output(format!("Response:\n{}", Paint::new(format!("request failed: {}", e)).red()));
            return Err(e.into());
        }
    };
    let status = resp.status().as_u16();
    let text = resp.text().await?;
    let parsed = if text.trim().is_empty() {
        Value::Null
    } else {
        serde_json::from_str(&text).unwrap_or(Value::String(text))
    };

    // Grayed out so the request line stands out
    let json_str = serde_json::to_string(&parsed).unwrap_or_default();
    log_output(format!("Response ({}):\n{}", status, Paint::new(json_str).rgb(100, 100, 100)));
    tracing::debug!(status, "CMS response");

    Ok(RawResponse { status, body: parsed })
}
