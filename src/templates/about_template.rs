use askama::Template;

use crate::models::{Activity, ViewState};

#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate<'a> {
    pub nav_active: &'static str,
    pub base_url: String,
    pub flash_messages: Vec<String>,
    pub has_flash_messages: bool,
    pub activities: &'a [Activity],
    pub activities_state: ViewState,
}

crate::impl_base_template!(AboutTemplate<'_>);
