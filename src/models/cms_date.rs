use serde::{Deserialize, Serialize};

/// Date field as the CMS sends it: either a plain string or `{"$date": "..."}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CmsDate {
    Wrapped {
        #[serde(rename = "$date")]
        date: String,
    },
    Plain(String),
}

impl CmsDate {
    pub fn as_str(&self) -> &str {
        match self {
            CmsDate::Wrapped { date } => date,
            CmsDate::Plain(s) => s,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_both_shapes() {
        let plain: CmsDate = serde_json::from_str(r#""2024-03-05""#).unwrap();
        let wrapped: CmsDate = serde_json::from_str(r#"{"$date": "2024-03-05T10:00:00Z"}"#).unwrap();
        assert_eq!(plain.as_str(), "2024-03-05");
        assert_eq!(wrapped.as_str(), "2024-03-05T10:00:00Z");
    }
}
