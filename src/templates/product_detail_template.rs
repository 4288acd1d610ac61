use askama::Template;

use crate::models::{Product, ViewState};

#[derive(Template)]
#[template(path = "product_detail.html")]
pub struct ProductDetailTemplate<'a> {
    pub nav_active: &'static str,
    pub base_url: String,
    pub flash_messages: Vec<String>,
    pub has_flash_messages: bool,
    pub product: Option<&'a Product>,
    pub product_state: ViewState,
}

crate::impl_base_template!(ProductDetailTemplate<'_>);
