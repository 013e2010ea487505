use super::Customer;
use crate::enums::CustomerStatus;
use crate::shared::list_query::aggregate::{count_where, sum_by};
use serde::{Deserialize, Serialize};

/// Summary cards of the customers page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerStats {
    pub total: usize,
    pub active: usize,
    pub total_rides: u64,
    pub total_spent: f64,
}

impl CustomerStats {
    pub fn compute(customers: &[Customer]) -> Self {
        Self {
            total: customers.len(),
            active: count_where(customers, |c| c.status == CustomerStatus::Active),
            total_rides: customers.iter().map(|c| u64::from(c.total_rides)).sum(),
            total_spent: sum_by(customers, |c| Some(c.total_spent)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_customers;

    #[test]
    fn test_compute() {
        let stats = CustomerStats::compute(&sample_customers());
        assert_eq!(stats.total, 2);
        assert_eq!(stats.active, 2);
        assert_eq!(stats.total_rides, 68);
        assert_eq!(stats.total_spent, 50500.0);
    }
}
