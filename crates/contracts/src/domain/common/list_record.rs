use super::EntityKind;
use crate::enums::FacetValue;

/// How a search field is compared against the query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Both sides lower-cased before the substring test
    IgnoreCase,
    /// Raw substring test (phone numbers)
    ExactCase,
}

/// One searchable text value of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchField<'a> {
    pub name: &'static str,
    pub value: &'a str,
    pub mode: MatchMode,
}

impl<'a> SearchField<'a> {
    pub fn ignore_case(name: &'static str, value: &'a str) -> Self {
        Self {
            name,
            value,
            mode: MatchMode::IgnoreCase,
        }
    }

    pub fn exact_case(name: &'static str, value: &'a str) -> Self {
        Self {
            name,
            value,
            mode: MatchMode::ExactCase,
        }
    }
}

/// A filter dimension with a fixed set of allowed codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetDef {
    pub name: &'static str,
    pub values: Vec<&'static str>,
}

impl FacetDef {
    /// Facet backed by an enum; allowed values are the enum's wire codes
    pub fn of<T: FacetValue>(name: &'static str) -> Self {
        Self {
            name,
            values: T::all().iter().map(|v| v.code()).collect(),
        }
    }

    pub fn accepts(&self, value: &str) -> bool {
        self.values.iter().any(|v| *v == value)
    }
}

/// Record that can be listed, searched, faceted and aggregated.
///
/// Field and facet names are plain strings so that the presentation layer can
/// send them back without knowing the concrete record type.
pub trait ListRecord: Clone {
    /// Entity kind, used in errors and logs
    const KIND: EntityKind;

    // ============================================================================
    // Instance data
    // ============================================================================

    /// Unique id of the record (e.g. "BK001")
    fn id(&self) -> &str;

    /// Text fields the free-text search looks at, in declaration order
    fn search_fields(&self) -> Vec<SearchField<'_>>;

    /// Wire code of the record's value for `facet`, `None` for unknown facets
    fn facet_value(&self, facet: &str) -> Option<&'static str>;

    /// Numeric field for sums and averages; `None` when the field is unknown
    /// or the record carries no value for it
    fn numeric_value(&self, _field: &str) -> Option<f64> {
        None
    }

    // ============================================================================
    // Static metadata
    // ============================================================================

    /// Facets this record type can be filtered by
    fn facets() -> Vec<FacetDef>;

    fn facet(name: &str) -> Option<FacetDef> {
        Self::facets().into_iter().find(|f| f.name == name)
    }
}
