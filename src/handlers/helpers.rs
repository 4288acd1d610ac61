use std::time::Instant;

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar};

use crate::config::CONTACT_ACK_TTL;
use crate::models::{AppState, FlashMessage};
use crate::services::{random_visitor_id, ViewGuard, ViewScope, VISITOR_COOKIE};
use crate::templates::BaseTemplate;

pub fn visitor_id_from_jar(jar: &CookieJar) -> Option<String> {
    jar.get(VISITOR_COOKIE).map(|c| c.value().to_string())
}

/// Return the visitor id carried by `jar`, minting a cookie when there is none.
pub fn ensure_visitor_id(jar: CookieJar) -> (CookieJar, String) {
    if let Some(id) = visitor_id_from_jar(&jar) {
        return (jar, id);
    }
    let id = random_visitor_id();
    let mut cookie = Cookie::new(VISITOR_COOKIE, id.clone());
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_max_age(time::Duration::days(365));
    (jar.add(cookie), id)
}

pub fn push_flash(state: &AppState, visitor_id: &str, text: impl Into<String>) {
    let mut flashes = state.flash_store.lock().unwrap();
    flashes.retain(|_, pending| {
        pending.retain(|m| m.set_at.elapsed() < CONTACT_ACK_TTL);
        !pending.is_empty()
    });
    flashes.entry(visitor_id.to_string()).or_default().push(FlashMessage {
        text: text.into(),
        set_at: Instant::now(),
    });
}

/// Drain the visitor's pending messages, dropping any older than the
/// acknowledgement window.
pub fn take_flash_messages(state: &AppState, jar: &CookieJar) -> Vec<String> {
    let Some(vid) = visitor_id_from_jar(jar) else {
        return vec![];
    };
    let mut fs = state.flash_store.lock().unwrap();
    fs.remove(&vid)
        .unwrap_or_default()
        .into_iter()
        .filter(|m| m.set_at.elapsed() < CONTACT_ACK_TTL)
        .map(|m| m.text)
        .collect()
}

#[derive(Default)]
pub struct TemplateGlobals {
    pub nav_active: &'static str,
    pub base_url: String,
    pub flash_messages: Vec<String>,
    pub has_flash_messages: bool,
}

pub fn build_template_globals(state: &AppState, jar: &CookieJar, nav_active: &'static str) -> TemplateGlobals {
    let flash_messages = take_flash_messages(state, jar);
    let has_flash_messages = !flash_messages.is_empty();
    TemplateGlobals {
        nav_active,
        base_url: state.public_base_url.clone(),
        flash_messages,
        has_flash_messages,
    }
}

/// Scope for the loads of one page render. The guard lives as long as the
/// handler future, so a dropped request cancels its pending fetches.
pub fn page_scope() -> (ViewGuard, ViewScope) {
    crate::services::view_scope()
}

pub fn render_template<T: askama::Template + BaseTemplate>(t: T) -> Response {
    render_with_status(StatusCode::OK, t)
}

pub fn render_with_status<T: askama::Template + BaseTemplate>(status: StatusCode, t: T) -> Response {
    match t.render() {
        Ok(body) => (status, Html(body)).into_response(),
        Err(e) => {
            tracing::error!(%e, page = t.nav_active(), "Template render error");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}
