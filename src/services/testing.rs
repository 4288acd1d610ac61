//! Scripted in-memory content service for controller tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use serde_json::{json, Value};

use crate::api::{ContentError, ContentPage, ContentService, ListOptions};
use crate::models::Record;

type ScriptedPage = Result<(Vec<Value>, bool), ContentError>;

#[derive(Default)]
pub(crate) struct MockContent {
    pages: Mutex<HashMap<usize, ScriptedPage>>,
    items: Mutex<HashMap<String, Result<Option<Value>, ContentError>>>,
    pub list_calls: Mutex<Vec<(String, ListOptions)>>,
    pub get_calls: Mutex<Vec<(String, String)>>,
    pub filters: Mutex<Vec<Value>>,
    delay: Option<Duration>,
}

pub(crate) fn product(id: &str) -> Value {
    json!({"_id": id, "productName": format!("Product {}", id)})
}

impl MockContent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Answer `list_page` at offset `skip` with these records.
    pub fn page(self, skip: usize, items: Vec<Value>, has_next: bool) -> Self {
        self.pages.lock().unwrap().insert(skip, Ok((items, has_next)));
        self
    }

    pub fn failing_page(self, skip: usize) -> Self {
        self.pages
            .lock()
            .unwrap()
            .insert(skip, Err(ContentError::Transport("connection refused".into())));
        self
    }

    pub fn item(self, id: &str, item: Option<Value>) -> Self {
        self.items.lock().unwrap().insert(id.to_string(), Ok(item));
        self
    }

    pub fn failing_item(self, id: &str) -> Self {
        self.items.lock().unwrap().insert(
            id.to_string(),
            Err(ContentError::Status { status: 500, body: "boom".into() }),
        );
        self
    }

    pub fn list_call_count(&self) -> usize {
        self.list_calls.lock().unwrap().len()
    }

    pub fn get_call_count(&self) -> usize {
        self.get_calls.lock().unwrap().len()
    }
}

fn decode<R: Record>(v: Value) -> Result<R, ContentError> {
    serde_json::from_value(v).map_err(|e| ContentError::Decode(e.to_string()))
}

impl ContentService for MockContent {
    async fn list_page<R: Record>(
        &self,
        collection: &str,
        filter: &Value,
        options: ListOptions,
    ) -> Result<ContentPage<R>, ContentError> {
        self.list_calls.lock().unwrap().push((collection.to_string(), options));
        self.filters.lock().unwrap().push(filter.clone());
        if let Some(d) = self.delay {
            tokio::time::sleep(d).await;
        }
        let scripted = self.pages.lock().unwrap().get(&options.skip()).cloned();
        match scripted {
            None => Ok(ContentPage::empty()),
            Some(Err(e)) => Err(e),
            Some(Ok((values, has_next))) => {
                let items = values.into_iter().map(decode).collect::<Result<Vec<R>, _>>()?;
                Ok(ContentPage { items, has_next })
            }
        }
    }

    async fn get_by_id<R: Record>(&self, collection: &str, id: &str) -> Result<Option<R>, ContentError> {
        self.get_calls.lock().unwrap().push((collection.to_string(), id.to_string()));
        if let Some(d) = self.delay {
            tokio::time::sleep(d).await;
        }
        let scripted = self.items.lock().unwrap().get(id).cloned();
        match scripted {
            None | Some(Ok(None)) => Ok(None),
            Some(Err(e)) => Err(e),
            Some(Ok(Some(v))) => decode(v).map(Some),
        }
    }
}
