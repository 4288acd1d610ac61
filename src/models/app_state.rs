use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Instant;

use crate::api::CmsClient;
use crate::services::ContactSubmitter;

/// A one-shot message for a visitor, shown on the next page render until it expires.
#[derive(Clone, Debug)]
pub struct FlashMessage {
    pub text: String,
    pub set_at: Instant,
}

pub type FlashStore = Arc<Mutex<HashMap<String, Vec<FlashMessage>>>>;

#[derive(Clone)]
pub struct AppState {
    pub cms: CmsClient,
    pub contact: ContactSubmitter,
    /// Pending flash messages keyed by visitor id.
    pub flash_store: FlashStore,
    pub public_base_url: String,
    pub shop_page_size: usize,
    pub custom_css: Option<String>,
}

impl AppState {
    pub fn cms_hostname(&self) -> String {
        crate::utils::hostname_from_url(&self.cms.connection().base_url)
    }
}
