use axum::{extract::State, response::IntoResponse};
use axum_extra::extract::cookie::CookieJar;

use crate::config::ABOUT_ACTIVITIES_LIMIT;
use crate::models::{Activity, AppState};
use crate::services::ListController;
use crate::templates::AboutTemplate;
use super::helpers::{build_template_globals, page_scope, render_template, TemplateGlobals};

pub async fn about_get(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let (_guard, scope) = page_scope();
    let mut activities: ListController<'_, _, Activity> =
        ListController::new(&state.cms, scope, ABOUT_ACTIVITIES_LIMIT);
    activities.load_first_page().await;

    let TemplateGlobals {
        nav_active,
        base_url,
        flash_messages,
        has_flash_messages,
    } = build_template_globals(&state, &jar, "about");

    render_template(AboutTemplate {
        nav_active,
        base_url,
        flash_messages,
        has_flash_messages,
        activities: activities.items(),
        activities_state: activities.view_state(),
    })
}
