use crate::domain::common::{EntityKind, FacetDef, ListRecord, SearchField};
use crate::enums::{FacetValue, VehicleStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fleet vehicle. `number` is the registration plate and is unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: String,
    pub number: String,
    #[serde(rename = "type")]
    pub vehicle_type: String,
    pub model: String,
    pub year: u16,
    pub driver_id: String,
    pub driver_name: String,
    pub status: VehicleStatus,
    /// Insurance expiry
    pub insurance: NaiveDate,
    /// Permit expiry
    pub permit: NaiveDate,
}

impl ListRecord for Vehicle {
    const KIND: EntityKind = EntityKind::Vehicle;

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<SearchField<'_>> {
        vec![
            SearchField::ignore_case("number", &self.number),
            SearchField::ignore_case("type", &self.vehicle_type),
            SearchField::ignore_case("model", &self.model),
            SearchField::ignore_case("driver_name", &self.driver_name),
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
            "year" => Some(f64::from(self.year)),
            _ => None,
        }
    }

    fn facets() -> Vec<FacetDef> {
        vec![FacetDef::of::<VehicleStatus>("status")]
    }
}
