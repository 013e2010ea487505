use crate::domain::a002_driver::Driver;
use serde::{Deserialize, Serialize};

/// One row of the "Top Driver Performance" table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverPerformance {
    pub driver_id: String,
    pub name: String,
    pub rides: u32,
    pub revenue: f64,
    pub rating: f64,
}

impl DriverPerformance {
    pub fn from_driver(driver: &Driver) -> Self {
        Self {
            driver_id: driver.id.clone(),
            name: driver.name.clone(),
            rides: driver.total_rides,
            revenue: driver.earnings,
            rating: driver.rating,
        }
    }

    /// "4.8/5"
    pub fn rating_label(&self) -> String {
        format!("{}/5", self.rating)
    }
}

/// Drivers ranked by rides, then revenue. Ties keep store order.
pub fn top_drivers(drivers: &[Driver], limit: usize) -> Vec<DriverPerformance> {
    let mut rows: Vec<DriverPerformance> = drivers.iter().map(DriverPerformance::from_driver).collect();
    rows.sort_by(|a, b| {
        b.rides
            .cmp(&a.rides)
            .then_with(|| b.revenue.total_cmp(&a.revenue))
    });
    rows.truncate(limit);
    rows
}
