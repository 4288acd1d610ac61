use axum::http::header::CACHE_CONTROL;
use axum::http::HeaderValue;
use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::models::AppState;

// Embed the default stylesheet in the binary
pub const DEFAULT_STYLESHEET: &str = include_str!("../static/styles.css");

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home::home_get))
        .route("/about", get(handlers::about::about_get))
        .route("/shop", get(handlers::shop::shop_get))
        .route("/shop/:product_id", get(handlers::shop::product_detail_get))
        .route(
            "/contact",
            get(handlers::contact::contact_get).post(handlers::contact::contact_post),
        )
        .route("/healthz", get(handlers::system::healthz))
        // Always serve styles.css - custom if provided, otherwise embedded
        .route("/static/styles.css", get(handlers::system::stylesheet_get))
        .nest_service(
            "/static",
            ServiceBuilder::new()
                .layer(SetResponseHeaderLayer::if_not_present(
                    CACHE_CONTROL,
                    HeaderValue::from_static("public, max-age=31536000, immutable"),
                ))
                .service(ServeDir::new("static")),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
