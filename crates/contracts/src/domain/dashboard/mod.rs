//! Headline numbers of the dashboard page, derived from the record store.

use crate::domain::a001_booking::Booking;
use crate::domain::a002_driver::Driver;
use crate::domain::a005_payment::Payment;
use crate::enums::{BookingStatus, DriverStatus, PaymentStatus};
use crate::shared::list_query::aggregate::{count_where, group_count_by, sum_by, GroupCount};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_bookings: usize,
    /// Assigned or ongoing
    pub active_rides: usize,
    pub completed_rides: usize,
    /// Sum of completed payments
    pub total_revenue: f64,
    pub total_drivers: usize,
    pub active_drivers: usize,
    pub ride_status: Vec<GroupCount<BookingStatus>>,
}

impl DashboardSummary {
    pub fn compute(bookings: &[Booking], drivers: &[Driver], payments: &[Payment]) -> Self {
        Self {
            total_bookings: bookings.len(),
            active_rides: count_where(bookings, |b| b.status.is_active()),
            completed_rides: count_where(bookings, |b| b.status == BookingStatus::Completed),
            total_revenue: sum_by(payments, |p| {
                (p.status == PaymentStatus::Completed).then_some(p.amount)
            }),
            total_drivers: drivers.len(),
            active_drivers: count_where(drivers, |d| d.status == DriverStatus::Active),
            ride_status: group_count_by(bookings, |b| b.status),
        }
    }

    /// Revenue per booking rounded to whole rupees, 0 without bookings
    pub fn average_revenue_per_booking(&self) -> f64 {
        if self.total_bookings == 0 {
            return 0.0;
        }
        (self.total_revenue / self.total_bookings as f64).round()
    }
}
