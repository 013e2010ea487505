use crate::domain::common::{EntityKind, FacetDef, ListRecord, SearchField};
use crate::enums::{CustomerStatus, FacetValue};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub total_rides: u32,
    pub total_spent: f64,
    pub rating: f64,
    pub status: CustomerStatus,
    pub join_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Customer {
    /// Rounded spend per ride; 0 for a customer without rides
    pub fn average_spend_per_ride(&self) -> f64 {
        if self.total_rides == 0 {
            return 0.0;
        }
        (self.total_spent / f64::from(self.total_rides)).round()
    }

    pub fn toggled_status(&self) -> CustomerStatus {
        match self.status {
            CustomerStatus::Active => CustomerStatus::Blocked,
            CustomerStatus::Blocked => CustomerStatus::Active,
        }
    }
}

impl ListRecord for Customer {
    const KIND: EntityKind = EntityKind::Customer;

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<SearchField<'_>> {
        vec![
            SearchField::ignore_case("name", &self.name),
            SearchField::exact_case("phone", &self.phone),
            SearchField::ignore_case("email", &self.email),
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
            "total_rides" => Some(f64::from(self.total_rides)),
            "total_spent" => Some(self.total_spent),
            "rating" => Some(self.rating),
            _ => None,
        }
    }

    fn facets() -> Vec<FacetDef> {
        vec![FacetDef::of::<CustomerStatus>("status")]
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::sample_customers;

    #[test]
    fn test_average_spend_per_ride() {
        let customers = sample_customers();
        // 18500 / 23 = 804.35
        assert_eq!(customers[0].average_spend_per_ride(), 804.0);

        let mut newcomer = customers[1].clone();
        newcomer.total_rides = 0;
        assert_eq!(newcomer.average_spend_per_ride(), 0.0);
    }
}
