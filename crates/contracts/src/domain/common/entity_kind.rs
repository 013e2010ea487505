use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of record held by the record store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Booking,
    Driver,
    Customer,
    Vehicle,
    Payment,
    Notification,
}

impl EntityKind {
    /// Singular name for UI
    pub fn element_name(&self) -> &'static str {
        match self {
            EntityKind::Booking => "Booking",
            EntityKind::Driver => "Driver",
            EntityKind::Customer => "Customer",
            EntityKind::Vehicle => "Vehicle",
            EntityKind::Payment => "Payment",
            EntityKind::Notification => "Notification",
        }
    }

    /// Plural name for UI list headers
    pub fn list_name(&self) -> &'static str {
        match self {
            EntityKind::Booking => "Bookings",
            EntityKind::Driver => "Drivers",
            EntityKind::Customer => "Customers",
            EntityKind::Vehicle => "Vehicles",
            EntityKind::Payment => "Payments",
            EntityKind::Notification => "Notifications",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.element_name())
    }
}
