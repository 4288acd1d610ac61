use crate::api::ContentService;
use crate::models::{Record, ViewState};
use super::list_controller::{run_scoped, LoadOutcome};
use super::view_scope::ViewScope;

/// Loads a single record by id for a detail view.
pub struct ItemLoader<'a, S, R> {
    service: &'a S,
    scope: ViewScope,
    item: Option<R>,
    is_loading: bool,
    loaded_id: Option<String>,
}

impl<'a, S: ContentService, R: Record> ItemLoader<'a, S, R> {
    pub fn new(service: &'a S, scope: ViewScope) -> Self {
        Self {
            service,
            scope,
            item: None,
            is_loading: true,
            loaded_id: None,
        }
    }

    /// Load the record for `id`. A missing or blank id never reaches the
    /// service and settles the view as not found; an id equal to the one
    /// already loaded is a no-op. Ids are opaque and passed on as given.
    pub async fn load(&mut self, id: Option<&str>) -> LoadOutcome {
        let Some(id) = id.filter(|s| !s.trim().is_empty()) else {
            self.is_loading = false;
            return LoadOutcome::Skipped;
        };
        if self.loaded_id.as_deref() == Some(id) {
            return LoadOutcome::Skipped;
        }

        let was_loading = self.is_loading;
        self.is_loading = true;
        let fetch = self.service.get_by_id::<R>(R::COLLECTION, id);
        let Some(result) = run_scoped(&self.scope, fetch).await else {
            self.is_loading = was_loading;
            tracing::debug!(collection = R::COLLECTION, id, "item load cancelled");
            return LoadOutcome::Cancelled;
        };
        self.is_loading = false;
        self.loaded_id = Some(id.to_string());
        match result {
            Ok(found) => {
                match &found {
                    Some(record) => tracing::debug!(collection = R::COLLECTION, id = record.id(), "Record loaded"),
                    None => tracing::info!(collection = R::COLLECTION, id, "Record not found"),
                }
                self.item = found;
                LoadOutcome::Loaded
            }
            Err(e) => {
                tracing::error!(%e, collection = R::COLLECTION, id, "Error loading record");
                self.item = None;
                LoadOutcome::Failed
            }
        }
    }

    pub fn item(&self) -> Option<&R> {
        self.item.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Loading, Empty (not found) or Populated.
    pub fn view_state(&self) -> ViewState {
        if self.is_loading {
            ViewState::Loading
        } else {
            ViewState::of(false, self.item.is_some())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Product;
    use crate::services::testing::{product, MockContent};

    #[tokio::test]
    async fn resolves_existing_record() {
        let mock = MockContent::new().item("p1", Some(product("p1")));
        let mut loader: ItemLoader<'_, _, Product> = ItemLoader::new(&mock, ViewScope::detached());
        assert_eq!(loader.view_state(), ViewState::Loading);

        assert_eq!(loader.load(Some("p1")).await, LoadOutcome::Loaded);
        assert!(!loader.is_loading());
        assert_eq!(loader.item().map(|p| p.id.as_str()), Some("p1"));
        assert_eq!(loader.view_state(), ViewState::Populated);
        assert_eq!(
            mock.get_calls.lock().unwrap().clone(),
            vec![("wholesaleproducts".to_string(), "p1".to_string())]
        );
    }

    #[tokio::test]
    async fn missing_record_is_not_found() {
        let mock = MockContent::new();
        let mut loader: ItemLoader<'_, _, Product> = ItemLoader::new(&mock, ViewScope::detached());
        loader.load(Some("missing")).await;
        assert!(loader.item().is_none());
        assert_eq!(loader.view_state(), ViewState::Empty);
    }

    #[tokio::test]
    async fn failure_is_not_found() {
        let mock = MockContent::new().failing_item("p9");
        let mut loader: ItemLoader<'_, _, Product> = ItemLoader::new(&mock, ViewScope::detached());
        assert_eq!(loader.load(Some("p9")).await, LoadOutcome::Failed);
        assert!(loader.item().is_none());
        assert!(!loader.is_loading());
        assert_eq!(loader.view_state(), ViewState::Empty);
    }

    #[tokio::test]
    async fn absent_or_blank_id_never_calls_service() {
        let mock = MockContent::new();
        let mut loader: ItemLoader<'_, _, Product> = ItemLoader::new(&mock, ViewScope::detached());
        assert_eq!(loader.load(None).await, LoadOutcome::Skipped);
        assert_eq!(loader.load(Some("   ")).await, LoadOutcome::Skipped);
        assert_eq!(mock.get_call_count(), 0);
        assert_eq!(loader.view_state(), ViewState::Empty);
    }

    #[tokio::test]
    async fn id_is_passed_through_untrimmed() {
        let mock = MockContent::new().item(" abc", Some(product(" abc")));
        let mut loader: ItemLoader<'_, _, Product> = ItemLoader::new(&mock, ViewScope::detached());
        assert_eq!(loader.load(Some(" abc")).await, LoadOutcome::Loaded);
        assert_eq!(
            mock.get_calls.lock().unwrap().clone(),
            vec![("wholesaleproducts".to_string(), " abc".to_string())]
        );
        assert_eq!(loader.item().map(|p| p.id.as_str()), Some(" abc"));
    }

    #[tokio::test]
    async fn reloads_only_when_id_changes() {
        let mock = MockContent::new()
            .item("p1", Some(product("p1")))
            .item("p2", Some(product("p2")));
        let mut loader: ItemLoader<'_, _, Product> = ItemLoader::new(&mock, ViewScope::detached());
        loader.load(Some("p1")).await;
        assert_eq!(loader.load(Some("p1")).await, LoadOutcome::Skipped);
        loader.load(Some("p2")).await;
        assert_eq!(mock.get_call_count(), 2);
        assert_eq!(loader.item().map(|p| p.id.as_str()), Some("p2"));
    }
}
