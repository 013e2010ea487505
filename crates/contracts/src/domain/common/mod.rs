//! Common types and traits for all list records

pub mod entity_kind;
pub mod list_record;

// Re-exports
pub use entity_kind::EntityKind;
pub use list_record::{FacetDef, ListRecord, MatchMode, SearchField};
