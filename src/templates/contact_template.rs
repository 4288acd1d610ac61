use askama::Template;

use crate::models::{ContactForm, FieldError};

#[derive(Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub nav_active: &'static str,
    pub base_url: String,
    pub flash_messages: Vec<String>,
    pub has_flash_messages: bool,
    pub form: ContactForm,
    pub errors: Vec<FieldError>,
    pub submit_failed: bool,
}

impl ContactTemplate {
    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors.iter().find(|e| e.field == field).map(|e| e.message)
    }
}

crate::impl_base_template!(ContactTemplate);
