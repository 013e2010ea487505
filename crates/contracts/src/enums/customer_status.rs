use super::{FacetValue, Tone};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerStatus {
    Active,
    Blocked,
}

impl FacetValue for CustomerStatus {
    fn all() -> &'static [Self] {
        &[CustomerStatus::Active, CustomerStatus::Blocked]
    }

    fn code(&self) -> &'static str {
        match self {
            CustomerStatus::Active => "active",
            CustomerStatus::Blocked => "blocked",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            CustomerStatus::Active => "Active",
            CustomerStatus::Blocked => "Blocked",
        }
    }

    fn tone(&self) -> Tone {
        match self {
            CustomerStatus::Active => Tone::Success,
            CustomerStatus::Blocked => Tone::Danger,
        }
    }
}
