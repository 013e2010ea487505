use super::Payment;
use crate::enums::{PaymentMethod, PaymentStatus};
use crate::shared::list_query::aggregate::{count_where, group_count_by, percent_of, sum_by, GroupCount};
use serde::{Deserialize, Serialize};

/// Summary cards and revenue breakdown of the payments page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentStats {
    pub total_amount: f64,
    pub total_commission: f64,
    pub total_driver_payout: f64,
    pub completed: usize,
    pub by_method: Vec<GroupCount<PaymentMethod>>,
    /// Commission as a share of gross, 0 when gross is 0
    pub commission_rate_percent: u32,
}

impl PaymentStats {
    pub fn compute(payments: &[Payment]) -> Self {
        let total_amount = sum_by(payments, |p| Some(p.amount));
        let total_commission = sum_by(payments, |p| Some(p.commission));
        Self {
            total_amount,
            total_commission,
            total_driver_payout: sum_by(payments, |p| Some(p.driver_payout)),
            completed: count_where(payments, |p| p.status == PaymentStatus::Completed),
            by_method: group_count_by(payments, |p| p.method),
            commission_rate_percent: percent_of(total_commission, total_amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_payments;

    #[test]
    fn test_compute() {
        let stats = PaymentStats::compute(&sample_payments());
        assert_eq!(stats.total_amount, 1500.0);
        assert_eq!(stats.total_commission, 150.0);
        assert_eq!(stats.total_driver_payout, 1350.0);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.commission_rate_percent, 10);
        assert_eq!(stats.by_method[0].key, PaymentMethod::Upi);
        assert_eq!(stats.by_method[0].percent, 50);
    }

    #[test]
    fn test_empty_has_no_rate() {
        let stats = PaymentStats::compute(&[]);
        assert_eq!(stats.commission_rate_percent, 0);
        assert!(stats.by_method.is_empty());
    }
}
