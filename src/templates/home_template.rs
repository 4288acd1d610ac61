use askama::Template;

use crate::models::{Activity, Product, ViewState};

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate<'a> {
    pub nav_active: &'static str,
    pub base_url: String,
    pub flash_messages: Vec<String>,
    pub has_flash_messages: bool,
    pub products: &'a [Product],
    pub products_state: ViewState,
    pub activities: &'a [Activity],
    pub activities_state: ViewState,
}

crate::impl_base_template!(HomeTemplate<'_>);
