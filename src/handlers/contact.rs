use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
};
use axum_extra::extract::cookie::CookieJar;

use crate::models::{AppState, ContactForm};
use crate::services::{normalize, validate};
use crate::templates::ContactTemplate;
use super::helpers::{build_template_globals, ensure_visitor_id, push_flash, render_template, render_with_status, TemplateGlobals};

pub const CONTACT_THANKS: &str = "Thank you for your inquiry! We'll get back to you within 24 hours.";

pub async fn contact_get(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let TemplateGlobals {
        nav_active,
        base_url,
        flash_messages,
        has_flash_messages,
    } = build_template_globals(&state, &jar, "contact");
    render_template(ContactTemplate {
        nav_active,
        base_url,
        flash_messages,
        has_flash_messages,
        form: ContactForm::default(),
        errors: vec![],
        submit_failed: false,
    })
}

/// Validate and hand the enquiry to the configured submitter. Success
/// redirects back to an empty form with a thank-you flash; anything else
/// re-renders the form with what the visitor typed.
pub async fn contact_post(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(mut form): Form<ContactForm>,
) -> impl IntoResponse {
    normalize(&mut form);
    let errors = validate(&form);

    let (status, submit_failed) = if !errors.is_empty() {
        tracing::info!(invalid = errors.len(), "Contact form rejected");
        (StatusCode::UNPROCESSABLE_ENTITY, false)
    } else {
        match state.contact.submit(&form).await {
            Ok(()) => {
                let (jar, visitor_id) = ensure_visitor_id(jar);
                push_flash(&state, &visitor_id, CONTACT_THANKS);
                return (jar, Redirect::to("/contact")).into_response();
            }
            Err(e) => {
                tracing::error!(%e, submitter = %state.contact.describe(), "Failed to submit contact enquiry");
                (StatusCode::BAD_GATEWAY, true)
            }
        }
    };

    let TemplateGlobals {
        nav_active,
        base_url,
        flash_messages,
        has_flash_messages,
    } = build_template_globals(&state, &jar, "contact");
    render_with_status(
        status,
        ContactTemplate {
            nav_active,
            base_url,
            flash_messages,
            has_flash_messages,
            form,
            errors,
            submit_failed,
        },
    )
}
