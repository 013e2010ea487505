//! View binding for list pages.
//!
//! [`ListState`] is the plain state of one page: query, facets, filtered view
//! and the detail selection. [`ListViewModel`] wraps it in a signal owned by
//! the page so that every setter re-renders whatever reads it.

pub mod detail;
pub mod options;
pub mod state;
pub mod view_model;

pub use detail::DetailState;
pub use options::{facet_options, FilterOption};
pub use state::ListState;
pub use view_model::ListViewModel;
