// URL handling utilities
pub mod url_parser;

// Parsing utilities
pub mod parse_int;

// Date display
pub mod date_format;

// Re-export all utilities for convenient access
pub use url_parser::hostname_from_url;
pub use parse_int::{page_offset, parse_optional_int, parse_page_number};
pub use date_format::{format_long_date, format_short_date, parse_cms_date};
