use super::{FacetValue, Tone};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationStatus {
    Sent,
    Draft,
    Scheduled,
}

impl FacetValue for NotificationStatus {
    fn all() -> &'static [Self] {
        &[
            NotificationStatus::Sent,
            NotificationStatus::Draft,
            NotificationStatus::Scheduled,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            NotificationStatus::Sent => "sent",
            NotificationStatus::Draft => "draft",
            NotificationStatus::Scheduled => "scheduled",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            NotificationStatus::Sent => "Sent",
            NotificationStatus::Draft => "Draft",
            NotificationStatus::Scheduled => "Scheduled",
        }
    }

    fn tone(&self) -> Tone {
        match self {
            NotificationStatus::Sent => Tone::Success,
            NotificationStatus::Draft => Tone::Muted,
            NotificationStatus::Scheduled => Tone::Warning,
        }
    }
}

/// Audience of a broadcast notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RecipientGroup {
    #[default]
    All,
    Drivers,
    Customers,
}

impl FacetValue for RecipientGroup {
    fn all() -> &'static [Self] {
        &[
            RecipientGroup::All,
            RecipientGroup::Drivers,
            RecipientGroup::Customers,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            RecipientGroup::All => "all",
            RecipientGroup::Drivers => "drivers",
            RecipientGroup::Customers => "customers",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            RecipientGroup::All => "all users",
            RecipientGroup::Drivers => "drivers",
            RecipientGroup::Customers => "customers",
        }
    }

    fn tone(&self) -> Tone {
        match self {
            RecipientGroup::All => Tone::Primary,
            RecipientGroup::Drivers => Tone::Secondary,
            RecipientGroup::Customers => Tone::Danger,
        }
    }
}
