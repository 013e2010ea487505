pub mod aggregate;
pub mod stats;

pub use aggregate::Booking;
pub use stats::BookingStats;
