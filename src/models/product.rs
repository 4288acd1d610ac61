use serde::{Deserialize, Serialize};

use super::cms_date::CmsDate;
use super::record::Record;

/// Collection ID: wholesaleproducts
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_createdDate", default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<CmsDate>,
    #[serde(rename = "_updatedDate", default, skip_serializing_if = "Option::is_none")]
    pub updated_date: Option<CmsDate>,
    #[serde(default)]
    pub product_name: Option<String>,
    /// Primary image URL
    #[serde(default)]
    pub product_image: Option<String>,
    /// Alternate image shown on hover
    #[serde(default)]
    pub product_image1: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub bulk_packaging_info: Option<String>,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl Record for Product {
    const COLLECTION: &'static str = "wholesaleproducts";

    fn id(&self) -> &str {
        &self.id
    }
}
