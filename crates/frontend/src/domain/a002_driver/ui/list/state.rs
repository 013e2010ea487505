use crate::shared::data::RecordStore;
use crate::shared::list_view::{facet_options, FilterOption, ListViewModel};
use contracts::domain::a002_driver::{Driver, DriverStats};
use contracts::enums::{DocumentsStatus, DriverStatus};
use contracts::shared::list_query::SearchOptions;

pub type DriverListState = ListViewModel<Driver>;

pub fn create_state(store: &RecordStore, options: SearchOptions) -> DriverListState {
    ListViewModel::from_source(store, options)
}

pub fn page_stats(state: &DriverListState) -> DriverStats {
    state.with_records(DriverStats::compute)
}

pub fn status_options() -> Vec<FilterOption> {
    facet_options::<DriverStatus>("All Status")
}

pub fn documents_options() -> Vec<FilterOption> {
    facet_options::<DocumentsStatus>("All Documents")
}
