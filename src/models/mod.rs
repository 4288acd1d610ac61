pub mod record;
pub mod cms_date;
pub mod product;
pub mod activity;
pub mod view_state;
pub mod contact_form;
pub mod app_state;

pub use record::Record;
pub use cms_date::CmsDate;
pub use product::Product;
pub use activity::Activity;
pub use view_state::ViewState;
pub use contact_form::{ContactForm, FieldError};
pub use app_state::{AppState, FlashMessage, FlashStore};
