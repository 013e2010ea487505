use crate::shared::data::RecordStore;
use crate::shared::list_view::{facet_options, FilterOption, ListViewModel};
use contracts::domain::a004_vehicle::{Vehicle, VehicleStats};
use contracts::enums::VehicleStatus;
use contracts::shared::list_query::SearchOptions;

pub type VehicleListState = ListViewModel<Vehicle>;

pub fn create_state(store: &RecordStore, options: SearchOptions) -> VehicleListState {
    ListViewModel::from_source(store, options)
}

pub fn page_stats(state: &VehicleListState) -> VehicleStats {
    state.with_records(VehicleStats::compute)
}

pub fn status_options() -> Vec<FilterOption> {
    facet_options::<VehicleStatus>("All Status")
}
