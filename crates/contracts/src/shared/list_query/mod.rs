//! In-memory list query engine shared by every list page.
//!
//! A query is a free-text search plus facet selections. It is turned into a
//! [`ListPredicate`], applied as a stable filter, and summarised by the
//! helpers in [`aggregate`].

pub mod aggregate;
pub mod engine;
pub mod error;
pub mod predicate;
pub mod source;

pub use aggregate::{average_by, percent_of, sum_by, GroupCount};
pub use engine::{filter, run_query, FilteredList, ListSummary};
pub use error::QueryError;
pub use predicate::{IgnoredFacet, IgnoredReason, ListPredicate, QueryInput, SearchOptions, ALL};
pub use source::RecordSource;
