pub mod aggregate;
pub mod stats;

pub use aggregate::Vehicle;
pub use stats::VehicleStats;
