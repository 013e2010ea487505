use crate::shared::data::RecordStore;
use crate::shared::list_view::{facet_options, FilterOption, ListViewModel};
use contracts::domain::a001_booking::{Booking, BookingStats};
use contracts::enums::BookingStatus;
use contracts::shared::list_query::SearchOptions;

pub type BookingListState = ListViewModel<Booking>;

pub fn create_state(store: &RecordStore, options: SearchOptions) -> BookingListState {
    ListViewModel::from_source(store, options)
}

/// Stat cards are computed over every booking, not the filtered view
pub fn page_stats(state: &BookingListState) -> BookingStats {
    state.with_records(BookingStats::compute)
}

pub fn status_options() -> Vec<FilterOption> {
    facet_options::<BookingStatus>("All Status")
}
