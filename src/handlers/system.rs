use axum::{extract::State, http::header, response::IntoResponse};

use crate::models::AppState;

pub async fn healthz() -> impl IntoResponse {
    "ok"
}

/// Stylesheet served at `/static/styles.css`: the `--stylesheet` override
/// when one was loaded, otherwise the embedded default.
pub async fn stylesheet_get(State(state): State<AppState>) -> impl IntoResponse {
    let css = state
        .custom_css
        .clone()
        .unwrap_or_else(|| crate::routes::DEFAULT_STYLESHEET.to_string());
    ([(header::CONTENT_TYPE, "text/css")], css)
}
