use crate::domain::common::{EntityKind, FacetDef, ListRecord, SearchField};
use crate::enums::{DocumentsStatus, DriverStatus, FacetValue};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Registered driver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub vehicle_number: String,
    pub vehicle_type: String,
    pub status: DriverStatus,
    /// 0..=5
    pub rating: f64,
    pub total_rides: u32,
    pub earnings: f64,
    pub documents_status: DocumentsStatus,
    pub join_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Driver {
    /// Status the activate/deactivate toggle would switch to
    pub fn toggled_status(&self) -> DriverStatus {
        match self.status {
            DriverStatus::Active => DriverStatus::Inactive,
            DriverStatus::Inactive | DriverStatus::Busy => DriverStatus::Active,
        }
    }
}

impl ListRecord for Driver {
    const KIND: EntityKind = EntityKind::Driver;

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<SearchField<'_>> {
        vec![
            SearchField::ignore_case("name", &self.name),
            SearchField::exact_case("phone", &self.phone),
            SearchField::ignore_case("vehicle_number", &self.vehicle_number),
            SearchField::ignore_case("email", &self.email),
        ]
    }

    fn facet_value(&self, facet: &str) -> Option<&'static str> {
        match facet {
            "status" => Some(self.status.code()),
            "documents" => Some(self.documents_status.code()),
            _ => None,
        }
    }

    fn numeric_value(&self, field: &str) -> Option<f64> {
        match field {
            "rating" => Some(self.rating),
            "total_rides" => Some(f64::from(self.total_rides)),
            "earnings" => Some(self.earnings),
            _ => None,
        }
    }

    fn facets() -> Vec<FacetDef> {
        vec![
            FacetDef::of::<DriverStatus>("status"),
            FacetDef::of::<DocumentsStatus>("documents"),
        ]
    }
}
