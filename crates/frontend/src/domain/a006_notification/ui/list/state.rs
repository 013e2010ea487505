use crate::shared::data::RecordStore;
use crate::shared::list_view::{facet_options, FilterOption, ListViewModel};
use contracts::domain::a006_notification::{Notification, NotificationStats};
use contracts::enums::NotificationStatus;
use contracts::shared::list_query::SearchOptions;

pub type NotificationListState = ListViewModel<Notification>;

pub fn create_state(store: &RecordStore, options: SearchOptions) -> NotificationListState {
    ListViewModel::from_source(store, options)
}

pub fn page_stats(state: &NotificationListState) -> NotificationStats {
    state.with_records(NotificationStats::compute)
}

pub fn status_options() -> Vec<FilterOption> {
    facet_options::<NotificationStatus>("All Status")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> NotificationListState {
        let store = RecordStore::sample().unwrap();
        create_state(&store, SearchOptions::default())
    }

    #[test]
    fn test_status_facet() {
        let state = state();
        state.set_facet("status", "scheduled".into());
        assert_eq!(state.with_items(|n| n[0].id.clone()), "N003");
        assert_eq!(state.summary().filtered_count, 1);

        state.set_facet("status", "draft".into());
        assert!(state.items().is_empty());
    }

    #[test]
    fn test_recipient_is_not_a_facet() {
        let state = state();
        state.set_facet("recipient", "drivers".into());
        assert_eq!(state.items().len(), 3);
    }

    #[test]
    fn test_page_stats() {
        let state = state();
        state.set_search("maintenance".into());
        let stats = page_stats(&state);
        assert_eq!(stats.sent, 2);
        assert_eq!(stats.scheduled, 1);
        assert_eq!(stats.total_recipients, 668);
    }
}
