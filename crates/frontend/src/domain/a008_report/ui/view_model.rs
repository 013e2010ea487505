use crate::shared::data::RecordStore;
use contracts::domain::a008_report::{
    top_drivers, DriverPerformance, ExportError, ExportReceipt, ReportExporter, ReportKind,
};
use contracts::domain::dashboard::DashboardSummary;
use leptos::prelude::*;
use std::sync::Arc;

/// Rows shown in the driver performance table
pub const TOP_DRIVERS: usize = 5;

/// ViewModel for the reports page
#[derive(Clone)]
pub struct ReportsViewModel {
    pub last_export: RwSignal<Option<String>>,
    pub error: RwSignal<Option<String>>,
    store: Arc<RecordStore>,
    exporter: Arc<dyn ReportExporter + Send + Sync>,
}

impl ReportsViewModel {
    pub fn new(store: Arc<RecordStore>, exporter: Arc<dyn ReportExporter + Send + Sync>) -> Self {
        Self {
            last_export: RwSignal::new(None),
            error: RwSignal::new(None),
            store,
            exporter,
        }
    }

    /// Key metric cards
    pub fn summary(&self) -> DashboardSummary {
        self.store.dashboard_summary()
    }

    pub fn driver_performance(&self) -> Vec<DriverPerformance> {
        top_drivers(self.store.drivers(), TOP_DRIVERS)
    }

    /// Requests a download; the toast text lands in `last_export`
    pub fn export(&self, kind: ReportKind) -> Result<ExportReceipt, ExportError> {
        match self.exporter.export(kind, self.store.records()) {
            Ok(receipt) => {
                self.error.set(None);
                self.last_export.set(Some(receipt.describe()));
                Ok(receipt)
            }
            Err(e) => {
                log::error!("{}", e);
                self.error.set(Some(e.to_string()));
                Err(e)
            }
        }
    }
}
