pub mod exporter;
pub mod performance;

pub use exporter::{ExportError, ExportReceipt, ReportExporter, ReportKind};
pub use performance::{top_drivers, DriverPerformance};
