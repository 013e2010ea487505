use super::{FacetValue, Tone};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleStatus {
    Active,
    Maintenance,
    Inactive,
}

impl FacetValue for VehicleStatus {
    fn all() -> &'static [Self] {
        &[
            VehicleStatus::Active,
            VehicleStatus::Maintenance,
            VehicleStatus::Inactive,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            VehicleStatus::Active => "active",
            VehicleStatus::Maintenance => "maintenance",
            VehicleStatus::Inactive => "inactive",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            VehicleStatus::Active => "Active",
            VehicleStatus::Maintenance => "Maintenance",
            VehicleStatus::Inactive => "Inactive",
        }
    }

    fn tone(&self) -> Tone {
        match self {
            VehicleStatus::Active => Tone::Success,
            VehicleStatus::Maintenance => Tone::Warning,
            VehicleStatus::Inactive => Tone::Muted,
        }
    }
}
