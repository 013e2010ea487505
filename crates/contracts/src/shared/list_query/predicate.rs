use crate::domain::common::{ListRecord, MatchMode};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::marker::PhantomData;

/// Facet selection meaning "do not filter by this facet"
pub const ALL: &str = "all";

/// Raw query state as sent by the presentation layer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryInput {
    #[serde(default)]
    pub search: String,
    /// facet name -> selected code or "all"
    #[serde(default)]
    pub facets: BTreeMap<String, String>,
}

impl QueryInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_facet(mut self, facet: impl Into<String>, value: impl Into<String>) -> Self {
        self.facets.insert(facet.into(), value.into());
        self
    }

    /// Selected value for a facet, "all" when nothing was chosen
    pub fn facet(&self, facet: &str) -> &str {
        self.facets.get(facet).map(String::as_str).unwrap_or(ALL)
    }
}

/// Search tuning, loaded from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Trimmed queries shorter than this (in chars) are treated as empty
    #[serde(default)]
    pub min_query_len: usize,
}

/// Why a facet selection was dropped from the predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoredReason {
    UnknownFacet,
    UnknownValue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoredFacet {
    pub facet: String,
    pub value: String,
    pub reason: IgnoredReason,
}

#[derive(Debug, Clone)]
struct Needle {
    raw: String,
    lower: String,
}

/// Compiled predicate over records of type `R`.
///
/// Text match OR-s over the record's search fields; facet matches are AND-ed
/// with it. Unknown facets and values fall through to "all".
#[derive(Debug, Clone)]
pub struct ListPredicate<R> {
    needle: Option<Needle>,
    facets: Vec<(&'static str, String)>,
    ignored: Vec<IgnoredFacet>,
    _record: PhantomData<fn(&R)>,
}

impl<R: ListRecord> ListPredicate<R> {
    pub fn build(input: &QueryInput, options: &SearchOptions) -> Self {
        let trimmed = input.search.trim();
        let needle = if trimmed.is_empty() || trimmed.chars().count() < options.min_query_len {
            None
        } else {
            Some(Needle {
                raw: trimmed.to_string(),
                lower: trimmed.to_lowercase(),
            })
        };

        let mut facets = Vec::new();
        let mut ignored = Vec::new();
        for (name, value) in &input.facets {
            if value == ALL {
                continue;
            }
            match R::facet(name) {
                Some(def) if def.accepts(value) => facets.push((def.name, value.clone())),
                Some(_) => {
                    log::warn!(
                        "{}: unknown value '{}' for facet '{}', ignored",
                        R::KIND,
                        value,
                        name
                    );
                    ignored.push(IgnoredFacet {
                        facet: name.clone(),
                        value: value.clone(),
                        reason: IgnoredReason::UnknownValue,
                    });
                }
                None => {
                    log::warn!("{}: unknown facet '{}', ignored", R::KIND, name);
                    ignored.push(IgnoredFacet {
                        facet: name.clone(),
                        value: value.clone(),
                        reason: IgnoredReason::UnknownFacet,
                    });
                }
            }
        }

        Self {
            needle,
            facets,
            ignored,
            _record: PhantomData,
        }
    }

    pub fn matches(&self, record: &R) -> bool {
        self.matches_text(record) && self.matches_facets(record)
    }

    pub fn matches_text(&self, record: &R) -> bool {
        let Some(needle) = &self.needle else {
            return true;
        };
        record.search_fields().iter().any(|field| match field.mode {
            MatchMode::IgnoreCase => field.value.to_lowercase().contains(&needle.lower),
            MatchMode::ExactCase => field.value.contains(&needle.raw),
        })
    }

    pub fn matches_facets(&self, record: &R) -> bool {
        self.facets
            .iter()
            .all(|(name, value)| record.facet_value(name) == Some(value.as_str()))
    }

    /// True when the predicate accepts every record
    pub fn is_unfiltered(&self) -> bool {
        self.needle.is_none() && self.facets.is_empty()
    }

    /// Facet selections that were dropped while building
    pub fn ignored(&self) -> &[IgnoredFacet] {
        &self.ignored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_booking::Booking;
    use crate::domain::a002_driver::Driver;
    use crate::test_support::{sample_bookings, sample_drivers};

    fn build<R: ListRecord>(input: &QueryInput) -> ListPredicate<R> {
        ListPredicate::build(input, &SearchOptions::default())
    }

    #[test]
    fn test_empty_search_reduces_to_facets() {
        let bookings = sample_bookings();
        for status in ["all", "pending", "completed", "ongoing", "cancelled"] {
            let input = QueryInput::new().with_facet("status", status);
            let p: ListPredicate<Booking> = build(&input);
            for b in &bookings {
                assert_eq!(p.matches(b), p.matches_facets(b));
            }
        }
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let bookings = sample_bookings();
        let p: ListPredicate<Booking> = build(&QueryInput::new().with_search("rAjKoT"));
        let hits: Vec<&str> = bookings.iter().filter(|b| p.matches(b)).map(|b| b.id.as_str()).collect();
        assert_eq!(hits, vec!["BK001"]);
    }

    #[test]
    fn test_search_is_trimmed() {
        let bookings = sample_bookings();
        let p: ListPredicate<Booking> = build(&QueryInput::new().with_search("  bk003 "));
        assert_eq!(bookings.iter().filter(|b| p.matches(b)).count(), 1);

        let blank: ListPredicate<Booking> = build(&QueryInput::new().with_search("   "));
        assert!(blank.is_unfiltered());
    }

    #[test]
    fn test_any_field_matches() {
        let bookings = sample_bookings();
        // drop location of BK002
        let p: ListPredicate<Booking> = build(&QueryInput::new().with_search("surat"));
        let hits: Vec<&str> = bookings.iter().filter(|b| p.matches(b)).map(|b| b.id.as_str()).collect();
        assert_eq!(hits, vec!["BK002"]);
    }

    #[test]
    fn test_exact_case_field() {
        let drivers = sample_drivers();
        let by_phone: ListPredicate<Driver> = build(&QueryInput::new().with_search("98765"));
        assert_eq!(drivers.iter().filter(|d| by_phone.matches(d)).count(), 1);

        // email is case-insensitive, phone stays exact
        let by_email: ListPredicate<Driver> = build(&QueryInput::new().with_search("ROHIT.SHARMA"));
        assert_eq!(drivers.iter().filter(|d| by_email.matches(d)).count(), 1);
    }

    #[test]
    fn test_facets_and_search_are_anded() {
        let bookings = sample_bookings();
        let input = QueryInput::new()
            .with_search("rajkot")
            .with_facet("status", "pending");
        let p: ListPredicate<Booking> = build(&input);
        assert!(bookings.iter().all(|b| !p.matches(b)));
    }

    #[test]
    fn test_facet_value_is_case_sensitive() {
        let bookings = sample_bookings();
        let p: ListPredicate<Booking> = build(&QueryInput::new().with_facet("status", "Completed"));
        // unknown value, treated as "all"
        assert!(p.is_unfiltered());
        assert_eq!(p.ignored().len(), 1);
        assert_eq!(p.ignored()[0].reason, IgnoredReason::UnknownValue);
        assert!(bookings.iter().all(|b| p.matches(b)));
    }

    #[test]
    fn test_unknown_facet_is_noop() {
        let p: ListPredicate<Booking> = build(&QueryInput::new().with_facet("colour", "red"));
        assert!(p.is_unfiltered());
        assert_eq!(p.ignored()[0].reason, IgnoredReason::UnknownFacet);
    }

    #[test]
    fn test_min_query_len() {
        let bookings = sample_bookings();
        let options = SearchOptions { min_query_len: 3 };
        let short: ListPredicate<Booking> =
            ListPredicate::build(&QueryInput::new().with_search("bk"), &options);
        assert!(short.is_unfiltered());
        assert!(bookings.iter().all(|b| short.matches(b)));

        let long: ListPredicate<Booking> =
            ListPredicate::build(&QueryInput::new().with_search("bk002"), &options);
        assert_eq!(bookings.iter().filter(|b| long.matches(b)).count(), 1);
    }
}
