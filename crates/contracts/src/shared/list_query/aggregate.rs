//! Derived numbers over a record collection.
//!
//! Everything is recomputed on demand; inputs are small and static.
//! Empty-input policy: sums and averages of nothing are `0.0`, percentages of
//! a zero whole are `0`.

use crate::domain::common::ListRecord;
use serde::{Deserialize, Serialize};

pub fn count_where<R>(records: &[R], predicate: impl Fn(&R) -> bool) -> usize {
    records.iter().filter(|r| predicate(*r)).count()
}

/// Sum of the values `value` yields; `None`s are skipped
pub fn sum_by<R>(records: &[R], value: impl Fn(&R) -> Option<f64>) -> f64 {
    records.iter().filter_map(value).sum()
}

/// Mean of the values `value` yields, `None`s skipped; 0.0 when there are none
pub fn average_by<R>(records: &[R], value: impl Fn(&R) -> Option<f64>) -> f64 {
    let (sum, n) = records
        .iter()
        .filter_map(value)
        .fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if n == 0 {
        0.0
    } else {
        sum / n as f64
    }
}

/// Sum over a named numeric field of the record
pub fn sum_field<R: ListRecord>(records: &[R], field: &str) -> f64 {
    sum_by(records, |r| r.numeric_value(field))
}

/// Average over a named numeric field of the record
pub fn average_field<R: ListRecord>(records: &[R], field: &str) -> f64 {
    average_by(records, |r| r.numeric_value(field))
}

/// `part / whole` as a whole percent, rounded half up; 0 when `whole` is 0
pub fn percent_of(part: f64, whole: f64) -> u32 {
    if whole <= 0.0 || part <= 0.0 {
        return 0;
    }
    (part / whole * 100.0).round() as u32
}

/// Number of records sharing one key value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupCount<K> {
    pub key: K,
    pub count: usize,
    /// Share of all records, rounded to a whole percent
    pub percent: u32,
}

/// Counts records per distinct key, in first-seen order
pub fn group_count_by<R, K: PartialEq>(records: &[R], key: impl Fn(&R) -> K) -> Vec<GroupCount<K>> {
    let mut groups: Vec<GroupCount<K>> = Vec::new();
    for record in records {
        let k = key(record);
        match groups.iter_mut().find(|g| g.key == k) {
            Some(group) => group.count += 1,
            None => groups.push(GroupCount {
                key: k,
                count: 1,
                percent: 0,
            }),
        }
    }

    let total = records.len() as f64;
    for group in &mut groups {
        group.percent = percent_of(group.count as f64, total);
    }
    groups
}

/// Counts records per value of a facet; records without a value are left out
/// of the groups but still count towards the percentage base
pub fn group_by_facet<R: ListRecord>(records: &[R], facet: &str) -> Vec<GroupCount<&'static str>> {
    group_count_by(records, |r| r.facet_value(facet))
        .into_iter()
        .filter_map(|g| {
            g.key.map(|key| GroupCount {
                key,
                count: g.count,
                percent: g.percent,
            })
        })
        .collect()
}
