use axum::{extract::State, response::IntoResponse};
use axum_extra::extract::cookie::CookieJar;

use crate::config::{HOME_FEATURED_PRODUCTS_LIMIT, HOME_RECENT_ACTIVITIES_LIMIT};
use crate::models::{Activity, AppState, Product};
use crate::services::ListController;
use crate::templates::HomeTemplate;
use super::helpers::{build_template_globals, page_scope, render_template, TemplateGlobals};

/// Landing page: a few featured products and the latest activities, fetched
/// side by side.
pub async fn home_get(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let (_guard, scope) = page_scope();
    let mut products: ListController<'_, _, Product> =
        ListController::new(&state.cms, scope.clone(), HOME_FEATURED_PRODUCTS_LIMIT);
    let mut activities: ListController<'_, _, Activity> =
        ListController::new(&state.cms, scope, HOME_RECENT_ACTIVITIES_LIMIT);

    tokio::join!(products.load_first_page(), activities.load_first_page());

    let TemplateGlobals {
        nav_active,
        base_url,
        flash_messages,
        has_flash_messages,
    } = build_template_globals(&state, &jar, "home");

    render_template(HomeTemplate {
        nav_active,
        base_url,
        flash_messages,
        has_flash_messages,
        products: products.items(),
        products_state: products.view_state(),
        activities: activities.items(),
        activities_state: activities.view_state(),
    })
}
