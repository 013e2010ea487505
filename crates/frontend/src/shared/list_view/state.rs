use super::detail::DetailState;
use contracts::domain::common::ListRecord;
use contracts::shared::list_query::{
    run_query, FilteredList, ListSummary, QueryError, QueryInput, SearchOptions,
};

/// State of one list page. Every setter recomputes the filtered view
/// synchronously.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState<R> {
    records: Vec<R>,
    options: SearchOptions,
    query: QueryInput,
    view: FilteredList<R>,
    detail: DetailState<R>,
}

impl<R: ListRecord> ListState<R> {
    pub fn new(records: Vec<R>, options: SearchOptions) -> Self {
        let mut state = Self {
            records,
            options,
            query: QueryInput::default(),
            view: FilteredList::default(),
            detail: DetailState::Closed,
        };
        state.recompute();
        state
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    /// Full collection, unfiltered
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Records passing the current query, in original order
    pub fn items(&self) -> &[R] {
        &self.view.items
    }

    pub fn summary(&self) -> ListSummary {
        self.view.summary
    }

    /// List card header, e.g. "All Bookings (3)"
    pub fn title(&self) -> String {
        format!("All {} ({})", R::KIND.list_name(), self.view.summary.filtered_count)
    }

    pub fn query(&self) -> &QueryInput {
        &self.query
    }

    pub fn search(&self) -> &str {
        &self.query.search
    }

    /// Current selection of a facet, "all" if untouched
    pub fn facet(&self, facet: &str) -> &str {
        self.query.facet(facet)
    }

    pub fn detail(&self) -> &DetailState<R> {
        &self.detail
    }

    // ------------------------------------------------------------------
    // Updates
    // ------------------------------------------------------------------

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.query.search = search.into();
        self.recompute();
    }

    pub fn set_facet(&mut self, facet: impl Into<String>, value: impl Into<String>) {
        self.query.facets.insert(facet.into(), value.into());
        self.recompute();
    }

    pub fn reset_filters(&mut self) {
        self.query = QueryInput::default();
        self.recompute();
    }

    /// Opens the detail view for `id`, replacing any open record
    pub fn select(&mut self, id: &str) -> Result<&R, QueryError> {
        match self.records.iter().find(|r| r.id() == id) {
            Some(record) => {
                self.detail = DetailState::Open(record.clone());
                Ok(record)
            }
            None => {
                log::warn!("{} '{}' selected but not in store", R::KIND, id);
                self.detail = DetailState::NotFound(id.to_string());
                Err(QueryError::not_found(R::KIND, id))
            }
        }
    }

    pub fn dismiss(&mut self) {
        self.detail = DetailState::Closed;
    }

    fn recompute(&mut self) {
        self.view = run_query(&self.records, &self.query, &self.options);
        log::debug!(
            "{} list: {}/{} shown (search '{}', facets {:?})",
            R::KIND,
            self.view.summary.filtered_count,
            self.view.summary.total_count,
            self.query.search,
            self.query.facets
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::RecordStore;
    use contracts::domain::a001_booking::Booking;
    use contracts::domain::a004_vehicle::Vehicle;

    fn booking_state() -> ListState<Booking> {
        let store = RecordStore::sample().unwrap();
        ListState::new(store.bookings().to_vec(), SearchOptions::default())
    }

    fn ids<R: ListRecord>(items: &[R]) -> Vec<&str> {
        items.iter().map(|r| r.id()).collect()
    }

    #[test]
    fn test_initial_view_is_everything() {
        let state = booking_state();
        assert_eq!(ids(state.items()), vec!["BK001", "BK002", "BK003"]);
        assert_eq!(state.facet("status"), "all");
        assert!(!state.summary().is_filtered());
        assert_eq!(state.title(), "All Bookings (3)");
    }

    #[test]
    fn test_setters_recompute() {
        let mut state = booking_state();
        state.set_facet("status", "ongoing");
        assert_eq!(ids(state.items()), vec!["BK003"]);
        assert_eq!(state.title(), "All Bookings (1)");

        state.set_search("rajkot");
        assert!(state.items().is_empty());
        assert_eq!(state.summary().filtered_count, 0);
        assert_eq!(state.summary().total_count, 3);

        state.set_facet("status", "all");
        assert_eq!(ids(state.items()), vec!["BK001"]);

        state.reset_filters();
        assert_eq!(state.items().len(), 3);
        assert_eq!(state.search(), "");
    }

    #[test]
    fn test_unknown_facet_value_falls_through() {
        let mut state = booking_state();
        state.set_facet("status", "teleported");
        assert_eq!(state.items().len(), 3);
    }

    #[test]
    fn test_detail_transitions() {
        let mut state = booking_state();
        assert_eq!(state.detail(), &DetailState::Closed);

        state.select("BK001").unwrap();
        assert_eq!(state.detail().selected_id(), Some("BK001"));

        // open(A) -> open(B) without closing
        state.select("BK002").unwrap();
        assert_eq!(state.detail().record().map(|b| b.id.as_str()), Some("BK002"));

        state.dismiss();
        assert!(!state.detail().is_open());
    }

    #[test]
    fn test_select_missing_is_not_found() {
        let store = RecordStore::sample().unwrap();
        let mut state = ListState::<Vehicle>::new(store.vehicles().to_vec(), SearchOptions::default());
        let err = state.select("V999").unwrap_err();
        assert_eq!(err.to_string(), "Vehicle 'V999' not found");
        assert_eq!(state.detail(), &DetailState::NotFound("V999".to_string()));
        assert!(state.detail().record().is_none());
        assert!(state.detail().is_open());
    }

    #[test]
    fn test_selection_survives_filtering() {
        let mut state = booking_state();
        state.select("BK002").unwrap();
        state.set_facet("status", "completed");
        assert_eq!(state.detail().selected_id(), Some("BK002"));
    }
}
