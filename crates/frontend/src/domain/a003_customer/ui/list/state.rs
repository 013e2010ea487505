use crate::shared::data::RecordStore;
use crate::shared::list_view::{facet_options, FilterOption, ListViewModel};
use contracts::domain::a003_customer::{Customer, CustomerStats};
use contracts::enums::CustomerStatus;
use contracts::shared::list_query::SearchOptions;

pub type CustomerListState = ListViewModel<Customer>;

pub fn create_state(store: &RecordStore, options: SearchOptions) -> CustomerListState {
    ListViewModel::from_source(store, options)
}

pub fn page_stats(state: &CustomerListState) -> CustomerStats {
    state.with_records(CustomerStats::compute)
}

pub fn status_options() -> Vec<FilterOption> {
    facet_options::<CustomerStatus>("All Status")
}
