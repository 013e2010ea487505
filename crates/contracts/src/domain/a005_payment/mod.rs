pub mod aggregate;
pub mod stats;

pub use aggregate::{Payment, DEFAULT_COMMISSION_RATE};
pub use stats::PaymentStats;
