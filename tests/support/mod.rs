//! In-process stand-in for the hosted data API, plus app state wired to it.
#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use harvest::api::{CmsClient, CmsConnection};
use harvest::models::AppState;
use harvest::services::ContactSubmitter;

pub const TEST_TOKEN: &str = "test-token";
pub const TEST_SITE: &str = "site-123";

#[derive(Clone, Debug)]
pub struct SeenRequest {
    pub collection: String,
    pub limit: u64,
    pub offset: u64,
    pub authorization: Option<String>,
    pub site_id: Option<String>,
}

#[derive(Default)]
pub struct FakeCms {
    collections: Mutex<HashMap<String, Vec<Value>>>,
    failing: Mutex<bool>,
    failing_collections: Mutex<HashSet<String>>,
    pub queries: Mutex<Vec<SeenRequest>>,
    pub gets: Mutex<Vec<String>>,
}

impl FakeCms {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Replace a collection's records (flat field maps carrying `_id`).
    pub fn seed(&self, collection: &str, records: Vec<Value>) {
        self.collections.lock().unwrap().insert(collection.to_string(), records);
    }

    pub fn fail_everything(&self) {
        *self.failing.lock().unwrap() = true;
    }

    /// Answer every request for `collection` with a server error.
    pub fn fail_collection(&self, collection: &str) {
        self.failing_collections.lock().unwrap().insert(collection.to_string());
    }

    fn is_failing(&self, collection: &str) -> bool {
        *self.failing.lock().unwrap() || self.failing_collections.lock().unwrap().contains(collection)
    }

    pub fn query_count(&self) -> usize {
        self.queries.lock().unwrap().len()
    }
}

fn header(headers: &HeaderMap, name: &str) -> Option<String> {
    headers.get(name).and_then(|v| v.to_str().ok()).map(str::to_string)
}

fn envelope(collection: &str, record: &Value) -> Value {
    json!({
        "id": record["_id"],
        "dataCollectionId": collection,
        "data": record,
    })
}

async fn query_items(
    State(cms): State<Arc<FakeCms>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let collection = body["dataCollectionId"].as_str().unwrap_or_default().to_string();
    let limit = body["query"]["paging"]["limit"].as_u64().unwrap_or(50);
    let offset = body["query"]["paging"]["offset"].as_u64().unwrap_or(0);
    cms.queries.lock().unwrap().push(SeenRequest {
        collection: collection.clone(),
        limit,
        offset,
        authorization: header(&headers, "authorization"),
        site_id: header(&headers, "wix-site-id"),
    });
    if cms.is_failing(&collection) {
        return (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"message": "backend down"}))).into_response();
    }

    let all = cms.collections.lock().unwrap().get(&collection).cloned().unwrap_or_default();
    let page: Vec<Value> = all
        .iter()
        .skip(offset as usize)
        .take(limit as usize)
        .map(|r| envelope(&collection, r))
        .collect();
    Json(json!({
        "dataItems": page,
        "pagingMetadata": {
            "count": page.len(),
            "offset": offset,
            "total": all.len(),
        }
    }))
    .into_response()
}

async fn get_item(
    State(cms): State<Arc<FakeCms>>,
    Path(id): Path<String>,
    Query(q): Query<HashMap<String, String>>,
) -> Response {
    cms.gets.lock().unwrap().push(id.clone());
    let collection = q.get("dataCollectionId").cloned().unwrap_or_default();
    if cms.is_failing(&collection) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "backend down").into_response();
    }
    let found = cms
        .collections
        .lock()
        .unwrap()
        .get(&collection)
        .and_then(|records| records.iter().find(|r| r["_id"] == id.as_str()).cloned());
    match found {
        Some(record) => Json(json!({"dataItem": envelope(&collection, &record)})).into_response(),
        None => (StatusCode::NOT_FOUND, Json(json!({"message": "WDE0073: Item not found"}))).into_response(),
    }
}

/// Start the fake API on an ephemeral port and return its base URL.
pub async fn spawn_fake_cms(cms: Arc<FakeCms>) -> String {
    let app = Router::new()
        .route("/wix-data/v2/items/query", post(query_items))
        .route("/wix-data/v2/items/:id", get(get_item))
        .with_state(cms);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

pub fn cms_client(base_url: &str) -> CmsClient {
    harvest::api::set_silent(true);
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();
    CmsClient::new(
        client,
        CmsConnection {
            base_url: base_url.to_string(),
            api_token: TEST_TOKEN.to_string(),
            site_id: TEST_SITE.to_string(),
        },
    )
}

pub fn app_state(base_url: &str, shop_page_size: usize) -> AppState {
    AppState {
        cms: cms_client(base_url),
        contact: ContactSubmitter::Simulated { delay: Duration::ZERO },
        flash_store: Arc::new(Mutex::new(HashMap::new())),
        public_base_url: "http://localhost:8080".to_string(),
        shop_page_size,
        custom_css: None,
    }
}

pub fn product(id: &str, name: &str) -> Value {
    json!({
        "_id": id,
        "productName": name,
        "sku": format!("SKU-{}", id.to_uppercase()),
        "category": "Dates",
        "description": format!("{} packed for wholesale.", name),
        "bulkPackagingInfo": "10 kg cartons, 100 cartons per pallet",
        "productImage": format!("https://static.example.com/{}.jpg", id),
    })
}

pub fn activity(id: &str, title: &str, date: &str) -> Value {
    json!({
        "_id": id,
        "activityTitle": title,
        "description": format!("{} recap.", title),
        "activityType": "Event",
        "activityDate": {"$date": date},
    })
}

pub fn catalogue() -> Vec<Value> {
    vec![
        product("medjool", "Medjool Dates"),
        product("barhi", "Barhi Dates"),
        product("ajwa", "Ajwa Dates"),
        product("sukkari", "Sukkari Dates"),
        product("khalas", "Khalas Dates"),
    ]
}
