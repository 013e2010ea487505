use super::Booking;
use crate::enums::BookingStatus;
use crate::shared::list_query::aggregate::{average_by, group_count_by, sum_by, GroupCount};
use serde::{Deserialize, Serialize};

/// Summary cards of the bookings page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingStats {
    pub total: usize,
    pub by_status: Vec<GroupCount<BookingStatus>>,
    pub total_fare: f64,
    pub average_fare: f64,
}

impl BookingStats {
    pub fn compute(bookings: &[Booking]) -> Self {
        Self {
            total: bookings.len(),
            by_status: group_count_by(bookings, |b| b.status),
            total_fare: sum_by(bookings, |b| Some(b.fare)),
            average_fare: average_by(bookings, |b| Some(b.fare)),
        }
    }

    pub fn count_of(&self, status: BookingStatus) -> usize {
        self.by_status
            .iter()
            .find(|g| g.key == status)
            .map(|g| g.count)
            .unwrap_or(0)
    }
}
