//! Presentation accessors for content records. Each optional field is exposed
//! as `Option<&str>` with blank values treated as absent, so templates never
//! render an empty label. Image fields are resolved to loadable URLs.

use crate::models::{Activity, Product};
use crate::utils::{format_long_date, format_short_date};

pub const PRODUCT_CARD_PLACEHOLDER: &str =
    "https://static.wixstatic.com/media/e51c33_600d215b974e4b809b2ca65bb8c4349d~mv2.png?originWidth=384&originHeight=384";
pub const PRODUCT_PREVIEW_PLACEHOLDER: &str =
    "https://static.wixstatic.com/media/e51c33_73b008bd23e846b8b501274ce6a2ea5b~mv2.png?originWidth=448&originHeight=448";
pub const PRODUCT_DETAIL_PLACEHOLDER: &str =
    "https://static.wixstatic.com/media/e51c33_efb7dbed4a9345858b82ace2453655c6~mv2.png?originWidth=640&originHeight=640";

const MEDIA_BASE_URL: &str = "https://static.wixstatic.com/media/";

fn non_blank(v: &Option<String>) -> Option<&str> {
    v.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Browser-loadable URL for a stored image field.
///
/// The CMS stores uploads as `wix:image://v1/<mediaId>/<name>#<meta>`; those
/// map onto the media host. Plain http(s) URLs pass through. Anything else is
/// treated as no image.
pub fn resolve_image_url(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if let Some(rest) = raw.strip_prefix("wix:image://v1/") {
        let media_id = rest.split(['/', '#', '?']).next().filter(|m| !m.is_empty())?;
        return Some(format!("{MEDIA_BASE_URL}{media_id}"));
    }
    if raw.starts_with("https://") || raw.starts_with("http://") {
        return Some(raw.to_string());
    }
    None
}

fn image_field(v: &Option<String>) -> Option<String> {
    non_blank(v).and_then(resolve_image_url)
}

impl Product {
    pub fn title(&self) -> Option<&str> {
        non_blank(&self.product_name)
    }

    pub fn alt_text(&self) -> &str {
        self.title().unwrap_or("Product")
    }

    pub fn summary(&self) -> Option<&str> {
        non_blank(&self.description)
    }

    pub fn category_badge(&self) -> Option<&str> {
        non_blank(&self.category)
    }

    pub fn sku_label(&self) -> Option<&str> {
        non_blank(&self.sku)
    }

    pub fn packaging(&self) -> Option<&str> {
        non_blank(&self.bulk_packaging_info)
    }

    pub fn hover_image(&self) -> Option<String> {
        image_field(&self.product_image1)
    }

    pub fn card_image(&self) -> String {
        image_field(&self.product_image).unwrap_or_else(|| PRODUCT_CARD_PLACEHOLDER.to_string())
    }

    pub fn preview_image(&self) -> String {
        image_field(&self.product_image).unwrap_or_else(|| PRODUCT_PREVIEW_PLACEHOLDER.to_string())
    }

    pub fn detail_image(&self) -> String {
        image_field(&self.product_image).unwrap_or_else(|| PRODUCT_DETAIL_PLACEHOLDER.to_string())
    }

    pub fn detail_path(&self) -> String {
        format!("/shop/{}", urlencoding::encode(&self.id))
    }
}

impl Activity {
    pub fn title(&self) -> Option<&str> {
        non_blank(&self.activity_title)
    }

    pub fn alt_text(&self) -> &str {
        self.title().unwrap_or("Activity")
    }

    pub fn summary(&self) -> Option<&str> {
        non_blank(&self.description)
    }

    pub fn type_badge(&self) -> Option<&str> {
        non_blank(&self.activity_type)
    }

    pub fn image(&self) -> Option<String> {
        image_field(&self.activity_image)
    }

    /// `March 5, 2024`; `None` suppresses the date badge.
    pub fn long_date(&self) -> Option<String> {
        self.activity_date.as_ref().and_then(|d| format_long_date(d.as_str()))
    }

    /// Short date for the home page, or `Update` when the activity has none.
    pub fn short_date_or_update(&self) -> String {
        self.activity_date
            .as_ref()
            .and_then(|d| format_short_date(d.as_str()))
            .unwrap_or_else(|| "Update".to_string())
    }
}
