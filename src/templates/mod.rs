// Base template trait for inheritance
pub mod base_template;
pub use base_template::BaseTemplate;

// Record presentation helpers
pub mod display;

// Individual page templates
pub mod home_template;
pub mod about_template;
pub mod shop_template;
pub mod product_detail_template;
pub mod contact_template;

// Re-export all templates
pub use home_template::HomeTemplate;
pub use about_template::AboutTemplate;
pub use shop_template::ShopTemplate;
pub use product_detail_template::ProductDetailTemplate;
pub use contact_template::ContactTemplate;
