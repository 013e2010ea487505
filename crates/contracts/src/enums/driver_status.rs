use super::{FacetValue, Tone};
use serde::{Deserialize, Serialize};

/// Availability of a driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DriverStatus {
    Active,
    Inactive,
    Busy,
}

impl FacetValue for DriverStatus {
    fn all() -> &'static [Self] {
        &[DriverStatus::Active, DriverStatus::Inactive, DriverStatus::Busy]
    }

    fn code(&self) -> &'static str {
        match self {
            DriverStatus::Active => "active",
            DriverStatus::Inactive => "inactive",
            DriverStatus::Busy => "busy",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            DriverStatus::Active => "Active",
            DriverStatus::Inactive => "Inactive",
            DriverStatus::Busy => "Busy",
        }
    }

    fn tone(&self) -> Tone {
        match self {
            DriverStatus::Active => Tone::Success,
            DriverStatus::Inactive => Tone::Muted,
            DriverStatus::Busy => Tone::Warning,
        }
    }
}

/// Verification state of the driver's uploaded documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentsStatus {
    Verified,
    Pending,
    Rejected,
}

impl FacetValue for DocumentsStatus {
    fn all() -> &'static [Self] {
        &[
            DocumentsStatus::Verified,
            DocumentsStatus::Pending,
            DocumentsStatus::Rejected,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            DocumentsStatus::Verified => "verified",
            DocumentsStatus::Pending => "pending",
            DocumentsStatus::Rejected => "rejected",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            DocumentsStatus::Verified => "Verified",
            DocumentsStatus::Pending => "Pending",
            DocumentsStatus::Rejected => "Rejected",
        }
    }

    fn tone(&self) -> Tone {
        match self {
            DocumentsStatus::Verified => Tone::Success,
            DocumentsStatus::Pending => Tone::Warning,
            DocumentsStatus::Rejected => Tone::Danger,
        }
    }
}
