pub mod aggregate;
pub mod stats;

pub use aggregate::Customer;
pub use stats::CustomerStats;
