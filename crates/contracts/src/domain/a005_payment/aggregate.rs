use crate::domain::common::{EntityKind, FacetDef, ListRecord, SearchField};
use crate::enums::{FacetValue, PaymentMethod, PaymentStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Platform share of a fare
pub const DEFAULT_COMMISSION_RATE: f64 = 0.10;

/// Payment for a booking, split between platform commission and driver payout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: String,
    pub booking_id: String,
    pub amount: f64,
    pub commission: f64,
    pub driver_payout: f64,
    pub status: PaymentStatus,
    pub method: PaymentMethod,
    pub date: DateTime<Utc>,
}

impl Payment {
    /// Payment with commission and payout derived from `amount`.
    /// Commission is rounded to whole rupees.
    pub fn with_commission_rate(
        id: impl Into<String>,
        booking_id: impl Into<String>,
        amount: f64,
        rate: f64,
        status: PaymentStatus,
        method: PaymentMethod,
        date: DateTime<Utc>,
    ) -> Self {
        let commission = (amount * rate).round();
        Self {
            id: id.into(),
            booking_id: booking_id.into(),
            amount,
            commission,
            driver_payout: amount - commission,
            status,
            method,
            date,
        }
    }

    /// amount == commission + payout (within a paisa)
    pub fn is_balanced(&self) -> bool {
        (self.amount - self.commission - self.driver_payout).abs() < 0.01
    }
}

impl ListRecord for Payment {
    const KIND: EntityKind = EntityKind::Payment;

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<SearchField<'_>> {
        vec![
            SearchField::ignore_case("id", &self.id),
            SearchField::ignore_case("booking_id", &self.booking_id),
        ]
    }

    fn facet_value(&self, facet: &str) -> Option<&'static str> {
        match facet {
            "status" => Some(self.status.code()),
            "method" => Some(self.method.code()),
            _ => None,
        }
    }

    fn numeric_value(&self, field: &str) -> Option<f64> {
        match field {
            "amount" => Some(self.amount),
            "commission" => Some(self.commission),
            "driver_payout" => Some(self.driver_payout),
            _ => None,
        }
    }

    fn facets() -> Vec<FacetDef> {
        vec![
            FacetDef::of::<PaymentStatus>("status"),
            FacetDef::of::<PaymentMethod>("method"),
        ]
    }
}
