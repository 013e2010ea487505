use super::Vehicle;
use crate::enums::VehicleStatus;
use crate::shared::list_query::aggregate::count_where;
use serde::{Deserialize, Serialize};

/// Summary cards of the vehicles page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleStats {
    pub total: usize,
    pub active: usize,
    pub maintenance: usize,
}

impl VehicleStats {
    pub fn compute(vehicles: &[Vehicle]) -> Self {
        Self {
            total: vehicles.len(),
            active: count_where(vehicles, |v| v.status == VehicleStatus::Active),
            maintenance: count_where(vehicles, |v| v.status == VehicleStatus::Maintenance),
        }
    }
}
