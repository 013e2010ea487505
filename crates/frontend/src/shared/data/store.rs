use contracts::domain::a001_booking::Booking;
use contracts::domain::a002_driver::Driver;
use contracts::domain::a003_customer::Customer;
use contracts::domain::a004_vehicle::Vehicle;
use contracts::domain::a005_payment::Payment;
use contracts::domain::a006_notification::Notification;
use contracts::domain::a007_platform_settings::PlatformSettings;
use contracts::domain::common::ListRecord;
use contracts::domain::dashboard::DashboardSummary;
use contracts::shared::list_query::{QueryError, RecordSource};
use contracts::shared::record_set::{DanglingReference, RecordSet};

/// Sample data bundled into the binary
const SAMPLE_DATA: &str = include_str!("sample_data.json");

/// Read-only record store. Loaded once, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordStore {
    records: RecordSet,
}

impl RecordStore {
    pub fn new(records: RecordSet) -> Self {
        Self { records }
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        Ok(Self::new(RecordSet::from_json(json)?))
    }

    /// Store filled with the bundled sample data
    pub fn sample() -> anyhow::Result<Self> {
        Self::from_json(SAMPLE_DATA)
    }

    pub fn records(&self) -> &RecordSet {
        &self.records
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.records.bookings
    }

    pub fn drivers(&self) -> &[Driver] {
        &self.records.drivers
    }

    pub fn customers(&self) -> &[Customer] {
        &self.records.customers
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.records.vehicles
    }

    pub fn payments(&self) -> &[Payment] {
        &self.records.payments
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.records.notifications
    }

    pub fn settings(&self) -> &PlatformSettings {
        &self.records.settings
    }

    pub fn dashboard_summary(&self) -> DashboardSummary {
        DashboardSummary::compute(self.bookings(), self.drivers(), self.payments())
    }

    /// Logs every dangling cross-entity reference and returns them
    pub fn report_dangling_references(&self) -> Vec<DanglingReference> {
        let dangling = self.records.find_dangling_references();
        for d in &dangling {
            log::warn!(
                "{} {}: {} '{}' does not match any {}",
                d.from,
                d.from_id,
                d.field,
                d.target_id,
                d.target
            );
        }
        dangling
    }
}

/// Typed access to one collection of the store
pub trait Collection<R> {
    fn collection(&self) -> &[R];
}

impl Collection<Booking> for RecordStore {
    fn collection(&self) -> &[Booking] {
        self.bookings()
    }
}

impl Collection<Driver> for RecordStore {
    fn collection(&self) -> &[Driver] {
        self.drivers()
    }
}

impl Collection<Customer> for RecordStore {
    fn collection(&self) -> &[Customer] {
        self.customers()
    }
}

impl Collection<Vehicle> for RecordStore {
    fn collection(&self) -> &[Vehicle] {
        self.vehicles()
    }
}

impl Collection<Payment> for RecordStore {
    fn collection(&self) -> &[Payment] {
        self.payments()
    }
}

impl Collection<Notification> for RecordStore {
    fn collection(&self) -> &[Notification] {
        self.notifications()
    }
}

impl<R> RecordSource<R> for RecordStore
where
    R: ListRecord,
    RecordStore: Collection<R>,
{
    fn list(&self) -> Vec<R> {
        self.collection().to_vec()
    }

    fn get(&self, id: &str) -> Result<R, QueryError> {
        self.collection()
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or_else(|| QueryError::not_found(R::KIND, id))
    }
}
