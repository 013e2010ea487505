use crate::shared::record_set::RecordSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Downloadable report offered by the reports and payments pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    Bookings,
    Drivers,
    Revenue,
    Payments,
    Full,
}

impl ReportKind {
    pub fn all() -> &'static [ReportKind] {
        &[
            ReportKind::Bookings,
            ReportKind::Drivers,
            ReportKind::Revenue,
            ReportKind::Payments,
            ReportKind::Full,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ReportKind::Bookings => "Bookings",
            ReportKind::Drivers => "Drivers",
            ReportKind::Revenue => "Revenue",
            ReportKind::Payments => "Payment",
            ReportKind::Full => "Full Report",
        }
    }

    /// Records the report is built from
    pub fn row_count(&self, records: &RecordSet) -> usize {
        match self {
            ReportKind::Bookings => records.bookings.len(),
            ReportKind::Drivers => records.drivers.len(),
            ReportKind::Revenue | ReportKind::Payments => records.payments.len(),
            ReportKind::Full => {
                records.bookings.len()
                    + records.drivers.len()
                    + records.customers.len()
                    + records.vehicles.len()
                    + records.payments.len()
                    + records.notifications.len()
            }
        }
    }
}

/// Accepted export request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportReceipt {
    pub kind: ReportKind,
    pub rows: usize,
}

impl ExportReceipt {
    /// Text for the confirmation toast
    pub fn describe(&self) -> String {
        format!(
            "{} report is being generated and will be downloaded shortly.",
            self.kind.display_name()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    #[error("Could not export {0} report: {1}")]
    Failed(&'static str, String),
}

/// Produces report downloads. Injected into the pages that offer export.
pub trait ReportExporter {
    fn export(&self, kind: ReportKind, records: &RecordSet) -> Result<ExportReceipt, ExportError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_record_set;

    #[test]
    fn test_row_count() {
        let set = sample_record_set();
        assert_eq!(ReportKind::Bookings.row_count(&set), 3);
        assert_eq!(ReportKind::Revenue.row_count(&set), 2);
        assert_eq!(ReportKind::Full.row_count(&set), 14);
        assert_eq!(ReportKind::Drivers.row_count(&RecordSet::default()), 0);
    }

    #[test]
    fn test_receipt_text() {
        let receipt = ExportReceipt { kind: ReportKind::Payments, rows: 2 };
        assert_eq!(
            receipt.describe(),
            "Payment report is being generated and will be downloaded shortly."
        );
    }
}
