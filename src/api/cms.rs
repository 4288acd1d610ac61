use serde_json::{json, Value};

use crate::models::Record;
use super::client::{cms_call, CmsConnection, RawResponse};
use super::error::ContentError;
use super::service::{ContentPage, ContentService, ListOptions};

const QUERY_ENDPOINT: &str = "/wix-data/v2/items/query";
const ITEMS_ENDPOINT: &str = "/wix-data/v2/items";

// Error bodies are echoed into logs; keep them short.
const MAX_ERROR_BODY_CHARS: usize = 300;

/// HTTP implementation of [`ContentService`] for the hosted data API.
#[derive(Clone, Debug)]
pub struct CmsClient {
    client: reqwest::Client,
    conn: CmsConnection,
}

impl CmsClient {
    pub fn new(client: reqwest::Client, conn: CmsConnection) -> Self {
        Self { client, conn }
    }

    pub fn connection(&self) -> &CmsConnection {
        &self.conn
    }
}

impl ContentService for CmsClient {
    async fn list_page<R: Record>(
        &self,
        collection: &str,
        filter: &Value,
        options: ListOptions,
    ) -> Result<ContentPage<R>, ContentError> {
        let body = build_query_body(collection, filter, options);
        let resp = cms_call(&self.client, &self.conn, "POST", QUERY_ENDPOINT, Some(body), None).await?;
        if !resp.is_success() {
            return Err(status_error(resp));
        }
        decode_query_response(&resp.body, options)
    }

    async fn get_by_id<R: Record>(&self, collection: &str, id: &str) -> Result<Option<R>, ContentError> {
        let endpoint = format!("{}/{}", ITEMS_ENDPOINT, urlencoding::encode(id));
        let params = vec![("dataCollectionId".to_string(), collection.to_string())];
        let resp = cms_call(&self.client, &self.conn, "GET", &endpoint, None, Some(params)).await?;
        if resp.status == 404 {
            return Ok(None);
        }
        if !resp.is_success() {
            return Err(status_error(resp));
        }
        decode_item_response(&resp.body)
    }
}

fn status_error(resp: RawResponse) -> ContentError {
    let body = match resp.body {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    };
    ContentError::Status {
        status: resp.status,
        body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
    }
}

/// Body of a query request. An empty filter object is left out entirely.
pub fn build_query_body(collection: &str, filter: &Value, options: ListOptions) -> Value {
    let mut query = json!({
        "paging": {
            "limit": options.limit(),
            "offset": options.skip(),
        }
    });
    let filter_is_empty = match filter {
        Value::Null => true,
        Value::Object(m) => m.is_empty(),
        _ => false,
    };
    if !filter_is_empty {
        query["filter"] = filter.clone();
    }
    json!({
        "dataCollectionId": collection,
        "query": query,
        "returnTotalCount": true,
    })
}

/// Decode a query response into a typed page.
///
/// Records that do not fit `R` are logged and left out; the rest of the page
/// still renders. Only a response without a `dataItems` array is an error.
pub fn decode_query_response<R: Record>(
    body: &Value,
    options: ListOptions,
) -> Result<ContentPage<R>, ContentError> {
    let raw_items = body
        .get("dataItems")
        .and_then(|v| v.as_array())
        .ok_or_else(|| ContentError::Decode("missing dataItems array".into()))?;

    let mut items = Vec::with_capacity(raw_items.len());
    for raw in raw_items {
        match decode_record::<R>(raw) {
            Ok(record) => items.push(record),
            Err(e) => {
                tracing::warn!(%e, collection = R::COLLECTION, id = raw_item_id(raw), "Skipping record");
            }
        }
    }

    // Skipped records still count towards the backend's offset.
    let has_next = has_next_from_paging(body.get("pagingMetadata"), raw_items.len(), options);
    Ok(ContentPage { items, has_next })
}

fn decode_record<R: Record>(raw: &Value) -> Result<R, ContentError> {
    let data = unwrap_data_item(raw)?;
    serde_json::from_value(data).map_err(|e| ContentError::Decode(format!("bad record in {}: {}", R::COLLECTION, e)))
}

/// Best-effort id of a raw envelope, for logs.
fn raw_item_id(raw: &Value) -> &str {
    raw.get("id")
        .and_then(|v| v.as_str())
        .or_else(|| raw.get("data").and_then(|d| d.get("_id")).and_then(|v| v.as_str()))
        .or_else(|| raw.get("_id").and_then(|v| v.as_str()))
        .unwrap_or("<unknown>")
}

/// Decode a single item response. A missing or null `dataItem` is "not found".
pub fn decode_item_response<R: Record>(body: &Value) -> Result<Option<R>, ContentError> {
    let raw = match body.get("dataItem") {
        None | Some(Value::Null) => return Ok(None),
        Some(v) => v,
    };
    let data = unwrap_data_item(raw)?;
    serde_json::from_value(data)
        .map(Some)
        .map_err(|e| ContentError::Decode(format!("bad record in {}: {}", R::COLLECTION, e)))
}

/// Pull the field map out of an item envelope, injecting the envelope id as
/// `_id` when the map does not carry one.
fn unwrap_data_item(raw: &Value) -> Result<Value, ContentError> {
    let obj = raw
        .as_object()
        .ok_or_else(|| ContentError::Decode("data item is not an object".into()))?;
    let mut data = match obj.get("data") {
        Some(Value::Object(m)) => m.clone(),
        Some(_) => return Err(ContentError::Decode("data item `data` is not an object".into())),
        // Some deployments return the fields flat.
        None => obj.clone(),
    };
    let has_id = data.get("_id").and_then(|v| v.as_str()).is_some_and(|s| !s.is_empty());
    if !has_id {
        match obj.get("id").and_then(|v| v.as_str()) {
            Some(id) if !id.is_empty() => {
                data.insert("_id".into(), Value::String(id.to_string()));
            }
            _ => return Err(ContentError::Decode("data item has no id".into())),
        }
    }
    Ok(Value::Object(data))
}

/// Work out the continuation flag from paging metadata.
///
/// Order of preference: explicit `hasNext`, then `offset + count < total`,
/// then presence of a next cursor. No metadata means no further pages.
pub fn has_next_from_paging(paging: Option<&Value>, returned: usize, options: ListOptions) -> bool {
    let Some(paging) = paging else {
        return false;
    };
    if let Some(flag) = paging.get("hasNext").and_then(|v| v.as_bool()) {
        return flag;
    }
    if let Some(total) = paging.get("total").and_then(|v| v.as_u64()) {
        let offset = paging
            .get("offset")
            .and_then(|v| v.as_u64())
            .unwrap_or(options.skip() as u64);
        let count = paging
            .get("count")
            .and_then(|v| v.as_u64())
            .unwrap_or(returned as u64);
        return offset + count < total;
    }
    paging
        .get("cursors")
        .and_then(|c| c.get("next"))
        .and_then(|n| n.as_str())
        .is_some_and(|n| !n.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Activity, Product};

    #[test]
    fn query_body_omits_empty_filter() {
        let body = build_query_body("wholesaleproducts", &json!({}), ListOptions::new(12, 24));
        assert_eq!(body["dataCollectionId"], "wholesaleproducts");
        assert_eq!(body["query"]["paging"]["limit"], 12);
        assert_eq!(body["query"]["paging"]["offset"], 24);
        assert!(body["query"].get("filter").is_none());
    }

    #[test]
    fn query_body_keeps_real_filter() {
        let filter = json!({"category": {"$eq": "Dates"}});
        let body = build_query_body("wholesaleproducts", &filter, ListOptions::new(3, 0));
        assert_eq!(body["query"]["filter"], filter);
    }

    #[test]
    fn decodes_items_in_backend_order() {
        let body = json!({
            "dataItems": [
                {"id": "b", "data": {"_id": "b", "productName": "Barhi Dates"}},
                {"id": "a", "data": {"productName": "Ajwa Dates", "sku": "AJ-1"}}
            ],
            "pagingMetadata": {"count": 2, "offset": 0, "total": 5}
        });
        let page: ContentPage<Product> = decode_query_response(&body, ListOptions::new(2, 0)).unwrap();
        let ids: Vec<&str> = page.items.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(page.items[1].sku.as_deref(), Some("AJ-1"));
        assert!(page.has_next);
    }

    #[test]
    fn missing_data_items_is_decode_error() {
        let err = decode_query_response::<Product>(&json!({"items": []}), ListOptions::new(3, 0)).unwrap_err();
        assert!(matches!(err, ContentError::Decode(_)));
    }

    #[test]
    fn item_without_any_id_is_skipped() {
        let body = json!({"dataItems": [{"data": {"productName": "x"}}, {"id": "k", "data": {}}]});
        let page = decode_query_response::<Product>(&body, ListOptions::new(3, 0)).unwrap();
        let ids: Vec<&str> = page.items.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["k"]);
    }

    #[test]
    fn off_schema_record_does_not_sink_the_page() {
        let body = json!({
            "dataItems": [
                {"id": "a", "data": {"_id": "a", "productName": "Ajwa"}},
                {"id": "b", "data": {"_id": "b", "productName": "Barhi", "sku": 1001}},
                {"id": "c", "data": {"productName": "Khalas", "description": {"nodes": []}}},
                "not an object"
            ],
            "pagingMetadata": {"total": 10}
        });
        let page = decode_query_response::<Product>(&body, ListOptions::new(4, 0)).unwrap();
        let ids: Vec<&str> = page.items.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a"]);
        // 0 + 4 raw items < 10
        assert!(page.has_next);
    }

    #[test]
    fn raw_item_id_falls_back_to_data_id() {
        assert_eq!(raw_item_id(&json!({"id": "x", "data": {"_id": "y"}})), "x");
        assert_eq!(raw_item_id(&json!({"data": {"_id": "y"}})), "y");
        assert_eq!(raw_item_id(&json!("junk")), "<unknown>");
    }

    #[test]
    fn has_next_prefers_explicit_flag() {
        let paging = json!({"hasNext": false, "total": 100, "offset": 0, "count": 3});
        assert!(!has_next_from_paging(Some(&paging), 3, ListOptions::new(3, 0)));
    }

    #[test]
    fn has_next_from_total() {
        let opts = ListOptions::new(3, 3);
        assert!(has_next_from_paging(Some(&json!({"total": 7, "offset": 3, "count": 3})), 3, opts));
        assert!(!has_next_from_paging(Some(&json!({"total": 6, "offset": 3, "count": 3})), 3, opts));
        // offset and count fall back to the request and the decoded length
        assert!(!has_next_from_paging(Some(&json!({"total": 4})), 1, opts));
    }

    #[test]
    fn has_next_from_cursor() {
        let opts = ListOptions::new(2, 0);
        assert!(has_next_from_paging(Some(&json!({"cursors": {"next": "abc"}})), 2, opts));
        assert!(!has_next_from_paging(Some(&json!({"cursors": {"next": null}})), 2, opts));
        assert!(!has_next_from_paging(None, 2, opts));
    }

    #[test]
    fn item_response_not_found_and_found() {
        assert!(decode_item_response::<Activity>(&json!({})).unwrap().is_none());
        assert!(decode_item_response::<Activity>(&json!({"dataItem": null})).unwrap().is_none());

        let body = json!({"dataItem": {"id": "act-1", "data": {"activityTitle": "Trade Fair"}}});
        let activity: Activity = decode_item_response(&body).unwrap().unwrap();
        assert_eq!(activity.id, "act-1");
        assert_eq!(activity.activity_title.as_deref(), Some("Trade Fair"));
    }
}
