use super::predicate::{ListPredicate, QueryInput, SearchOptions};
use crate::domain::common::ListRecord;
use serde::{Deserialize, Serialize};

/// Stable filter: keeps records in their original order, never re-sorts
pub fn filter<R: Clone>(records: &[R], predicate: impl Fn(&R) -> bool) -> Vec<R> {
    records.iter().filter(|r| predicate(*r)).cloned().collect()
}

/// Counts shown next to a list header ("All Bookings (3)")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ListSummary {
    pub total_count: usize,
    pub filtered_count: usize,
}

impl ListSummary {
    pub fn is_filtered(&self) -> bool {
        self.filtered_count != self.total_count
    }
}

/// Result of one query over a record collection
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredList<R> {
    pub items: Vec<R>,
    pub summary: ListSummary,
}

impl<R> Default for FilteredList<R> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            summary: ListSummary::default(),
        }
    }
}

/// Builds the predicate for `input` and applies it to `records`
pub fn run_query<R: ListRecord>(
    records: &[R],
    input: &QueryInput,
    options: &SearchOptions,
) -> FilteredList<R> {
    let predicate = ListPredicate::<R>::build(input, options);
    let items = if predicate.is_unfiltered() {
        records.to_vec()
    } else {
        filter(records, |r| predicate.matches(r))
    };

    FilteredList {
        summary: ListSummary {
            total_count: records.len(),
            filtered_count: items.len(),
        },
        items,
    }
}
