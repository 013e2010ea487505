use super::Driver;
use crate::enums::DriverStatus;
use crate::shared::list_query::aggregate::{average_by, count_where};
use serde::{Deserialize, Serialize};

/// Summary cards of the drivers page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverStats {
    pub total: usize,
    pub active: usize,
    pub busy: usize,
    /// 0.0 when there are no drivers
    pub average_rating: f64,
}

impl DriverStats {
    pub fn compute(drivers: &[Driver]) -> Self {
        Self {
            total: drivers.len(),
            active: count_where(drivers, |d| d.status == DriverStatus::Active),
            busy: count_where(drivers, |d| d.status == DriverStatus::Busy),
            average_rating: average_by(drivers, |d| Some(d.rating)),
        }
    }

    /// Average rating with one decimal, as shown on the card
    pub fn average_rating_label(&self) -> String {
        format!("{:.1}", self.average_rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_drivers;

    #[test]
    fn test_compute() {
        let stats = DriverStats::compute(&sample_drivers());
        assert_eq!(stats.total, 2);
        assert_eq!(stats.active, 1);
        assert_eq!(stats.busy, 1);
        assert!((stats.average_rating - 4.75).abs() < 1e-9);

        let single = DriverStats::compute(&sample_drivers()[..1]);
        assert_eq!(single.average_rating_label(), "4.7");
    }

    #[test]
    fn test_empty_rating_is_zero() {
        let stats = DriverStats::compute(&[]);
        assert_eq!(stats.average_rating, 0.0);
        assert_eq!(stats.average_rating_label(), "0.0");
    }
}
