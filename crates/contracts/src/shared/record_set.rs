use crate::domain::a001_booking::Booking;
use crate::domain::a002_driver::Driver;
use crate::domain::a003_customer::Customer;
use crate::domain::a004_vehicle::Vehicle;
use crate::domain::a005_payment::Payment;
use crate::domain::a006_notification::Notification;
use crate::domain::a007_platform_settings::PlatformSettings;
use crate::domain::common::{EntityKind, ListRecord};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Every collection the admin panel lists, as loaded at startup
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSet {
    #[serde(default)]
    pub bookings: Vec<Booking>,
    #[serde(default)]
    pub drivers: Vec<Driver>,
    #[serde(default)]
    pub customers: Vec<Customer>,
    #[serde(default)]
    pub vehicles: Vec<Vehicle>,
    #[serde(default)]
    pub payments: Vec<Payment>,
    #[serde(default)]
    pub notifications: Vec<Notification>,
    #[serde(default)]
    pub settings: PlatformSettings,
}

/// A reference from one record to an id that does not exist
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DanglingReference {
    pub from: EntityKind,
    pub from_id: String,
    pub field: &'static str,
    pub target: EntityKind,
    pub target_id: String,
}

impl RecordSet {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let set: RecordSet = serde_json::from_str(json).context("Failed to parse record set")?;
        set.check_unique_ids()?;
        set.check_values()?;
        Ok(set)
    }

    /// Ids are unique per collection, plate numbers across the fleet
    fn check_unique_ids(&self) -> anyhow::Result<()> {
        ensure_unique(&self.bookings)?;
        ensure_unique(&self.drivers)?;
        ensure_unique(&self.customers)?;
        ensure_unique(&self.vehicles)?;
        ensure_unique(&self.payments)?;
        ensure_unique(&self.notifications)?;

        let mut plates = HashSet::new();
        for v in &self.vehicles {
            if !plates.insert(v.number.as_str()) {
                anyhow::bail!("Duplicate vehicle number '{}'", v.number);
            }
        }
        Ok(())
    }

    /// Value ranges of the data model. A record outside them would skew
    /// averages and payout totals, so the whole set is rejected.
    fn check_values(&self) -> anyhow::Result<()> {
        for b in &self.bookings {
            anyhow::ensure!(b.fare > 0.0, "Booking '{}': fare must be positive, got {}", b.id, b.fare);
            if let Some(distance) = b.distance {
                anyhow::ensure!(distance >= 0.0, "Booking '{}': negative distance {}", b.id, distance);
            }
        }
        for d in &self.drivers {
            ensure_rating(EntityKind::Driver, &d.id, d.rating)?;
            anyhow::ensure!(d.earnings >= 0.0, "Driver '{}': negative earnings {}", d.id, d.earnings);
        }
        for c in &self.customers {
            ensure_rating(EntityKind::Customer, &c.id, c.rating)?;
            anyhow::ensure!(
                c.total_spent >= 0.0,
                "Customer '{}': negative total spent {}",
                c.id,
                c.total_spent
            );
        }
        for p in &self.payments {
            anyhow::ensure!(
                p.amount >= 0.0 && p.commission >= 0.0 && p.driver_payout >= 0.0,
                "Payment '{}': negative amount, commission or payout",
                p.id
            );
            anyhow::ensure!(
                p.is_balanced(),
                "Payment '{}': amount {} != commission {} + payout {}",
                p.id,
                p.amount,
                p.commission,
                p.driver_payout
            );
        }
        Ok(())
    }

    /// Cross-entity references that point nowhere.
    ///
    /// References are display hints; this only reports them.
    pub fn find_dangling_references(&self) -> Vec<DanglingReference> {
        let drivers: HashSet<&str> = self.drivers.iter().map(|d| d.id.as_str()).collect();
        let customers: HashSet<&str> = self.customers.iter().map(|c| c.id.as_str()).collect();
        let bookings: HashSet<&str> = self.bookings.iter().map(|b| b.id.as_str()).collect();

        let mut dangling = Vec::new();
        let mut check = |from: EntityKind,
                         from_id: &str,
                         field: &'static str,
                         target: EntityKind,
                         known: &HashSet<&str>,
                         target_id: &str| {
            if !known.contains(target_id) {
                dangling.push(DanglingReference {
                    from,
                    from_id: from_id.to_string(),
                    field,
                    target,
                    target_id: target_id.to_string(),
                });
            }
        };

        for b in &self.bookings {
            check(EntityKind::Booking, &b.id, "customer_id", EntityKind::Customer, &customers, &b.customer_id);
            if let Some(driver_id) = &b.driver_id {
                check(EntityKind::Booking, &b.id, "driver_id", EntityKind::Driver, &drivers, driver_id);
            }
        }
        for v in &self.vehicles {
            check(EntityKind::Vehicle, &v.id, "driver_id", EntityKind::Driver, &drivers, &v.driver_id);
        }
        for p in &self.payments {
            check(EntityKind::Payment, &p.id, "booking_id", EntityKind::Booking, &bookings, &p.booking_id);
        }
        dangling
    }
}

fn ensure_unique<R: ListRecord>(records: &[R]) -> anyhow::Result<()> {
    let mut seen = HashSet::new();
    for r in records {
        if !seen.insert(r.id()) {
            anyhow::bail!("Duplicate {} id '{}'", R::KIND, r.id());
        }
    }
    Ok(())
}

fn ensure_rating(kind: EntityKind, id: &str, rating: f64) -> anyhow::Result<()> {
    anyhow::ensure!(
        (0.0..=5.0).contains(&rating),
        "{} '{}': rating {} is outside 0..=5",
        kind,
        id,
        rating
    );
    Ok(())
}
