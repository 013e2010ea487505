use crate::domain::common::{EntityKind, FacetDef, ListRecord, SearchField};
use crate::enums::{BookingStatus, FacetValue};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A ride booked by a customer.
///
/// `driver_id` is normally present once the booking leaves `pending`, but the
/// data does not guarantee it; treat it as a display hint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub customer_id: String,
    pub customer_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver_name: Option<String>,
    pub pickup_location: String,
    pub drop_location: String,
    pub fare: f64,
    pub status: BookingStatus,
    pub booking_time: DateTime<Utc>,
    /// Kilometres
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    /// Minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
}

impl Booking {
    pub fn has_driver(&self) -> bool {
        self.driver_id.is_some()
    }

    /// Pending bookings can still be assigned or cancelled
    pub fn is_actionable(&self) -> bool {
        self.status == BookingStatus::Pending
    }
}

impl ListRecord for Booking {
    const KIND: EntityKind = EntityKind::Booking;

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<SearchField<'_>> {
        vec![
            SearchField::ignore_case("id", &self.id),
            SearchField::ignore_case("customer_name", &self.customer_name),
            SearchField::ignore_case("pickup_location", &self.pickup_location),
            SearchField::ignore_case("drop_location", &self.drop_location),
        ]
    }

    fn facet_value(&self, facet: &str) -> Option<&'static str> {
        match facet {
            "status" => Some(self.status.code()),
            _ => None,
        }
    }

    fn numeric_value(&self, field: &str) -> Option<f64> {
        match field {
            "fare" => Some(self.fare),
            "distance" => self.distance,
            "duration" => self.duration.map(f64::from),
            _ => None,
        }
    }

    fn facets() -> Vec<FacetDef> {
        vec![FacetDef::of::<BookingStatus>("status")]
    }
}
