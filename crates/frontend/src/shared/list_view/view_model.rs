use super::detail::DetailState;
use super::state::ListState;
use contracts::domain::common::ListRecord;
use contracts::shared::list_query::{ListSummary, QueryError, RecordSource, SearchOptions};
use leptos::prelude::*;

/// Reactive handle to a list page's state.
///
/// Created inside the page component so the state is disposed with it.
/// Cheap to copy into event handlers.
pub struct ListViewModel<R: Send + Sync + 'static> {
    pub state: RwSignal<ListState<R>>,
}

impl<R: Send + Sync + 'static> Clone for ListViewModel<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Send + Sync + 'static> Copy for ListViewModel<R> {}

impl<R> ListViewModel<R>
where
    R: ListRecord + Send + Sync + 'static,
{
    pub fn new(records: Vec<R>, options: SearchOptions) -> Self {
        Self {
            state: RwSignal::new(ListState::new(records, options)),
        }
    }

    /// Snapshot the source's collection into a new page state
    pub fn from_source(source: &impl RecordSource<R>, options: SearchOptions) -> Self {
        Self::new(source.list(), options)
    }

    // ------------------------------------------------------------------
    // Events from the page
    // ------------------------------------------------------------------

    pub fn set_search(&self, search: String) {
        self.state.update(|s| s.set_search(search));
    }

    pub fn set_facet(&self, facet: &str, value: String) {
        self.state.update(|s| s.set_facet(facet, value));
    }

    pub fn reset_filters(&self) {
        self.state.update(|s| s.reset_filters());
    }

    /// Opens the detail view; a missing id leaves it in `NotFound`
    pub fn select(&self, id: &str) -> Result<(), QueryError> {
        self.state
            .try_update(|s| s.select(id).map(|_| ()))
            .unwrap_or_else(|| Err(QueryError::not_found(R::KIND, id)))
    }

    pub fn dismiss(&self) {
        self.state.update(|s| s.dismiss());
    }

    // ------------------------------------------------------------------
    // Reads (tracked)
    // ------------------------------------------------------------------

    pub fn items(&self) -> Vec<R> {
        self.state.with(|s| s.items().to_vec())
    }

    pub fn summary(&self) -> ListSummary {
        self.state.with(|s| s.summary())
    }

    pub fn title(&self) -> String {
        self.state.with(|s| s.title())
    }

    pub fn search(&self) -> String {
        self.state.with(|s| s.search().to_string())
    }

    pub fn facet(&self, facet: &str) -> String {
        self.state.with(|s| s.facet(facet).to_string())
    }

    pub fn detail(&self) -> DetailState<R> {
        self.state.with(|s| s.detail().clone())
    }

    /// Computes something over the full collection
    pub fn with_records<T>(&self, f: impl FnOnce(&[R]) -> T) -> T {
        self.state.with(|s| f(s.records()))
    }

    /// Computes something over the filtered view
    pub fn with_items<T>(&self, f: impl FnOnce(&[R]) -> T) -> T {
        self.state.with(|s| f(s.items()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::RecordStore;
    use contracts::domain::a002_driver::Driver;
    use contracts::domain::a005_payment::Payment;

    #[test]
    fn test_view_model_updates_signal() {
        let store = RecordStore::sample().unwrap();
        let vm: ListViewModel<Driver> = ListViewModel::from_source(&store, SearchOptions::default());
        assert_eq!(vm.summary().filtered_count, 2);

        let handle = vm;
        handle.set_facet("status", "busy".to_string());
        assert_eq!(vm.items().len(), 1);
        assert_eq!(vm.facet("status"), "busy");
        assert_eq!(vm.title(), "All Drivers (1)");

        vm.set_search("amit".to_string());
        assert_eq!(vm.summary().filtered_count, 0);

        vm.reset_filters();
        assert_eq!(vm.summary().filtered_count, 2);
    }

    #[test]
    fn test_view_model_detail() {
        let store = RecordStore::sample().unwrap();
        let vm: ListViewModel<Payment> = ListViewModel::from_source(&store, SearchOptions::default());
        vm.select("PAY002").unwrap();
        assert_eq!(vm.detail().selected_id(), Some("PAY002"));
        assert!(vm.select("PAY404").is_err());
        assert_eq!(vm.detail(), DetailState::NotFound("PAY404".to_string()));
        vm.dismiss();
        assert_eq!(vm.detail(), DetailState::Closed);
    }

    #[test]
    fn test_aggregates_over_all_and_filtered() {
        let store = RecordStore::sample().unwrap();
        let vm: ListViewModel<Payment> = ListViewModel::from_source(&store, SearchOptions::default());
        vm.set_facet("method", "cash".to_string());
        let all = vm.with_records(|p| p.len());
        let shown = vm.with_items(|p| p.iter().map(|x| x.amount).sum::<f64>());
        assert_eq!(all, 2);
        assert_eq!(shown, 650.0);
    }
}
