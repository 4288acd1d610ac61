use serde::{Deserialize, Serialize};

use super::cms_date::CmsDate;
use super::record::Record;

/// Collection ID: companyactivities
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_createdDate", default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<CmsDate>,
    #[serde(rename = "_updatedDate", default, skip_serializing_if = "Option::is_none")]
    pub updated_date: Option<CmsDate>,
    #[serde(default)]
    pub activity_title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub activity_image: Option<String>,
    #[serde(default)]
    pub activity_date: Option<CmsDate>,
    #[serde(default)]
    pub activity_type: Option<String>,
}

impl Record for Activity {
    const COLLECTION: &'static str = "companyactivities";

    fn id(&self) -> &str {
        &self.id
    }
}
