use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use axum_extra::extract::cookie::CookieJar;

use crate::models::{AppState, Product};
use crate::services::{ItemLoader, ListController};
use crate::templates::{ProductDetailTemplate, ShopTemplate};
use crate::utils::parse_page_number;
use super::helpers::{build_template_globals, page_scope, render_template, render_with_status, TemplateGlobals};

/// Upper bound on `?page=` so one request cannot walk the whole collection.
pub const MAX_SHOP_PAGES: usize = 50;

/// Catalogue grid. `?page=n` renders the first `n` pages, which is what the
/// "Load More" link asks for.
pub async fn shop_get(
    State(state): State<AppState>,
    Query(q): Query<HashMap<String, String>>,
    jar: CookieJar,
) -> impl IntoResponse {
    let pages = parse_page_number(q.get("page"), MAX_SHOP_PAGES);
    let (_guard, scope) = page_scope();
    let mut products: ListController<'_, _, Product> =
        ListController::new(&state.cms, scope, state.shop_page_size);
    let outcome = products.load_pages(pages).await;
    tracing::debug!(?outcome, pages, loaded = products.items().len(), "Shop page loaded");

    let TemplateGlobals {
        nav_active,
        base_url,
        flash_messages,
        has_flash_messages,
    } = build_template_globals(&state, &jar, "shop");

    render_template(ShopTemplate {
        nav_active,
        base_url,
        flash_messages,
        has_flash_messages,
        products: products.items(),
        products_state: products.view_state(),
        has_next: products.has_next(),
        next_page: products.pages_loaded() + 1,
    })
}

pub async fn product_detail_get(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
    jar: CookieJar,
) -> impl IntoResponse {
    let (_guard, scope) = page_scope();
    let mut loader: ItemLoader<'_, _, Product> = ItemLoader::new(&state.cms, scope);
    loader.load(Some(product_id.as_str())).await;

    let TemplateGlobals {
        nav_active,
        base_url,
        flash_messages,
        has_flash_messages,
    } = build_template_globals(&state, &jar, "shop");

    let status = if loader.item().is_some() { StatusCode::OK } else { StatusCode::NOT_FOUND };
    render_with_status(
        status,
        ProductDetailTemplate {
            nav_active,
            base_url,
            flash_messages,
            has_flash_messages,
            product: loader.item(),
            product_state: loader.view_state(),
        },
    )
}
