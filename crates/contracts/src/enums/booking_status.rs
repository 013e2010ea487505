use super::{FacetValue, Tone};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Assigned,
    Ongoing,
    Completed,
    Cancelled,
}

impl BookingStatus {
    /// A driver is on the ride (assigned or already driving)
    pub fn is_active(&self) -> bool {
        matches!(self, BookingStatus::Assigned | BookingStatus::Ongoing)
    }
}

impl FacetValue for BookingStatus {
    fn all() -> &'static [Self] {
        &[
            BookingStatus::Pending,
            BookingStatus::Assigned,
            BookingStatus::Ongoing,
            BookingStatus::Completed,
            BookingStatus::Cancelled,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Assigned => "assigned",
            BookingStatus::Ongoing => "ongoing",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Assigned => "Assigned",
            BookingStatus::Ongoing => "Ongoing",
            BookingStatus::Completed => "Completed",
            BookingStatus::Cancelled => "Cancelled",
        }
    }

    fn tone(&self) -> Tone {
        match self {
            BookingStatus::Pending => Tone::Warning,
            BookingStatus::Assigned => Tone::Primary,
            BookingStatus::Ongoing => Tone::Success,
            BookingStatus::Completed => Tone::Muted,
            BookingStatus::Cancelled => Tone::Danger,
        }
    }
}
