use askama::Template;

use crate::models::{Product, ViewState};

#[derive(Template)]
#[template(path = "shop.html")]
pub struct ShopTemplate<'a> {
    pub nav_active: &'static str,
    pub base_url: String,
    pub flash_messages: Vec<String>,
    pub has_flash_messages: bool,
    pub products: &'a [Product],
    pub products_state: ViewState,
    /// Show the "Load More" affordance.
    pub has_next: bool,
    /// Page number the "Load More" link asks for.
    pub next_page: usize,
}

crate::impl_base_template!(ShopTemplate<'_>);
