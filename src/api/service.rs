use std::future::Future;

use serde_json::Value;

use crate::models::Record;
use super::error::ContentError;

/// Paging window for a list request. `limit` is at least 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListOptions {
    limit: usize,
    skip: usize,
}

impl ListOptions {
    pub fn new(limit: usize, skip: usize) -> Self {
        Self { limit: limit.max(1), skip }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn skip(&self) -> usize {
        self.skip
    }
}

/// One page of a collection plus the continuation flag.
#[derive(Clone, Debug, PartialEq)]
pub struct ContentPage<R> {
    pub items: Vec<R>,
    pub has_next: bool,
}

impl<R> ContentPage<R> {
    pub fn empty() -> Self {
        Self { items: Vec::new(), has_next: false }
    }
}

/// Read-only access to the hosted content service.
///
/// Both calls make exactly one attempt. Callers decide what a failure means;
/// the page controllers treat it as "no data".
pub trait ContentService: Send + Sync {
    /// Fetch `options.limit()` records starting at `options.skip()` in backend order.
    fn list_page<R: Record>(
        &self,
        collection: &str,
        filter: &Value,
        options: ListOptions,
    ) -> impl Future<Output = Result<ContentPage<R>, ContentError>> + Send;

    /// Fetch one record; `Ok(None)` when the service has no such id.
    fn get_by_id<R: Record>(
        &self,
        collection: &str,
        id: &str,
    ) -> impl Future<Output = Result<Option<R>, ContentError>> + Send;
}

/// Filter value meaning "everything in the collection".
pub fn match_all() -> Value {
    Value::Object(serde_json::Map::new())
}
