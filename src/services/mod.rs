pub mod view_scope;
pub mod list_controller;
pub mod item_loader;
pub mod contact_service;
pub mod visitor;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used items
pub use view_scope::{view_scope, ViewGuard, ViewScope};
pub use list_controller::{ListController, LoadOutcome};
pub use item_loader::ItemLoader;
pub use contact_service::{normalize, validate, ContactError, ContactSubmitter};
pub use visitor::{random_visitor_id, VISITOR_COOKIE};
