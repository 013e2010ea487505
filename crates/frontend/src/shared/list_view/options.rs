use contracts::enums::FacetValue;
use contracts::shared::list_query::ALL;

/// One entry of a facet dropdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub value: &'static str,
    pub label: &'static str,
    /// Badge colour of the value; `None` for the "all" entry
    pub badge_class: Option<&'static str>,
}

/// Dropdown entries for a facet: "all" first, then every variant
pub fn facet_options<T: FacetValue>(all_label: &'static str) -> Vec<FilterOption> {
    std::iter::once(FilterOption {
        value: ALL,
        label: all_label,
        badge_class: None,
    })
    .chain(T::all().iter().map(|v| FilterOption {
        value: v.code(),
        label: v.display_name(),
        badge_class: Some(v.badge_class()),
    }))
    .collect()
}
