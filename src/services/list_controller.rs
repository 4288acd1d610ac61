use std::future::Future;

use serde_json::Value;

use crate::api::{match_all, ContentService, ListOptions};
use crate::models::{Record, ViewState};
use super::view_scope::ViewScope;

/// Result of one load attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The fetch succeeded and state was updated.
    Loaded,
    /// The fetch failed; state degraded to empty/unchanged.
    Failed,
    /// Nothing to do (no further page, no id, id unchanged).
    Skipped,
    /// The owning view went away; state was not updated.
    Cancelled,
}

/// Run `fut` unless the scope closes first.
pub(crate) async fn run_scoped<F: Future>(scope: &ViewScope, fut: F) -> Option<F::Output> {
    if scope.is_closed() {
        return None;
    }
    tokio::select! {
        biased;
        _ = scope.closed() => None,
        out = fut => Some(out),
    }
}

/// Paginated list of records from one collection.
///
/// The first page replaces whatever was loaded; each next page is appended in
/// backend order. Starts in the loading state, as a freshly mounted view does.
pub struct ListController<'a, S, R> {
    service: &'a S,
    scope: ViewScope,
    filter: Value,
    limit: usize,
    skip: usize,
    items: Vec<R>,
    has_next: bool,
    is_loading: bool,
}

impl<'a, S: ContentService, R: Record> ListController<'a, S, R> {
    pub fn new(service: &'a S, scope: ViewScope, limit: usize) -> Self {
        Self {
            service,
            scope,
            filter: match_all(),
            limit: limit.max(1),
            skip: 0,
            items: Vec::new(),
            has_next: false,
            is_loading: true,
        }
    }

    pub fn with_filter(mut self, filter: Value) -> Self {
        self.filter = filter;
        self
    }

    pub async fn load_first_page(&mut self) -> LoadOutcome {
        let was_loading = self.is_loading;
        self.is_loading = true;
        let options = ListOptions::new(self.limit, 0);
        let fetch = self.service.list_page::<R>(R::COLLECTION, &self.filter, options);
        let Some(result) = run_scoped(&self.scope, fetch).await else {
            self.is_loading = was_loading;
            tracing::debug!(collection = R::COLLECTION, "first page load cancelled");
            return LoadOutcome::Cancelled;
        };
        self.is_loading = false;
        self.skip = 0;
        match result {
            Ok(mut page) => {
                page.items.truncate(self.limit);
                self.items = page.items;
                self.has_next = page.has_next;
                LoadOutcome::Loaded
            }
            Err(e) => {
                tracing::error!(%e, collection = R::COLLECTION, limit = self.limit, "Error loading first page");
                self.items.clear();
                self.has_next = false;
                LoadOutcome::Failed
            }
        }
    }

    /// Fetch the page after the last one loaded and append it.
    pub async fn load_next_page(&mut self) -> LoadOutcome {
        if !self.has_next {
            return LoadOutcome::Skipped;
        }
        let was_loading = self.is_loading;
        self.is_loading = true;
        let next_skip = self.skip + self.limit;
        let options = ListOptions::new(self.limit, next_skip);
        let fetch = self.service.list_page::<R>(R::COLLECTION, &self.filter, options);
        let Some(result) = run_scoped(&self.scope, fetch).await else {
            self.is_loading = was_loading;
            tracing::debug!(collection = R::COLLECTION, skip = next_skip, "next page load cancelled");
            return LoadOutcome::Cancelled;
        };
        self.is_loading = false;
        match result {
            Ok(mut page) => {
                page.items.truncate(self.limit);
                self.items.extend(page.items);
                self.skip = next_skip;
                self.has_next = page.has_next;
                LoadOutcome::Loaded
            }
            Err(e) => {
                tracing::error!(%e, collection = R::COLLECTION, skip = next_skip, limit = self.limit, "Error loading next page");
                self.has_next = false;
                LoadOutcome::Failed
            }
        }
    }

    /// Load the first `pages` pages (at least one), stopping early when the
    /// collection runs out or a load does not succeed.
    pub async fn load_pages(&mut self, pages: usize) -> LoadOutcome {
        let mut outcome = self.load_first_page().await;
        for _ in 1..pages.max(1) {
            if outcome != LoadOutcome::Loaded || !self.has_next {
                break;
            }
            outcome = self.load_next_page().await;
        }
        outcome
    }

    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn has_next(&self) -> bool {
        self.has_next
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn skip(&self) -> usize {
        self.skip
    }

    /// Number of pages currently held.
    pub fn pages_loaded(&self) -> usize {
        if self.items.is_empty() && !self.has_next {
            return if self.is_loading { 0 } else { 1 };
        }
        self.skip / self.limit + 1
    }

    pub fn view_state(&self) -> ViewState {
        ViewState::of(self.is_loading, !self.items.is_empty())
    }
}
