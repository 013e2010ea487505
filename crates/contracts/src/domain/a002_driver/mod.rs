pub mod aggregate;
pub mod stats;

pub use aggregate::Driver;
pub use stats::DriverStats;
