// Content service access
pub mod client;
pub mod error;
pub mod service;
pub mod cms;

// Re-export commonly used items
pub use client::{cms_call, set_silent, CmsConnection, RawResponse};
pub use error::ContentError;
pub use service::{match_all, ContentPage, ContentService, ListOptions};
pub use cms::CmsClient;
