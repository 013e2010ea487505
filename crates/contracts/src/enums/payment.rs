use super::{FacetValue, Tone};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Completed,
    Pending,
    Failed,
}

impl FacetValue for PaymentStatus {
    fn all() -> &'static [Self] {
        &[
            PaymentStatus::Completed,
            PaymentStatus::Pending,
            PaymentStatus::Failed,
        ]
    }

    fn code(&self) -> &'static str {
        match self {
            PaymentStatus::Completed => "completed",
            PaymentStatus::Pending => "pending",
            PaymentStatus::Failed => "failed",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            PaymentStatus::Completed => "Completed",
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Failed => "Failed",
        }
    }

    fn tone(&self) -> Tone {
        match self {
            PaymentStatus::Completed => Tone::Success,
            PaymentStatus::Pending => Tone::Warning,
            PaymentStatus::Failed => Tone::Danger,
        }
    }
}

/// How the rider paid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    Card,
    Upi,
}

impl FacetValue for PaymentMethod {
    fn all() -> &'static [Self] {
        &[PaymentMethod::Cash, PaymentMethod::Card, PaymentMethod::Upi]
    }

    fn code(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Card => "card",
            PaymentMethod::Upi => "upi",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "CASH",
            PaymentMethod::Card => "CARD",
            PaymentMethod::Upi => "UPI",
        }
    }

    fn tone(&self) -> Tone {
        match self {
            PaymentMethod::Cash => Tone::Muted,
            PaymentMethod::Card => Tone::Primary,
            PaymentMethod::Upi => Tone::Secondary,
        }
    }
}
