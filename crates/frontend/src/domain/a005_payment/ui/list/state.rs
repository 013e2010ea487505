use crate::shared::data::RecordStore;
use crate::shared::list_view::{facet_options, FilterOption, ListViewModel};
use contracts::domain::a005_payment::{Payment, PaymentStats};
use contracts::domain::a008_report::{ExportError, ExportReceipt, ReportExporter, ReportKind};
use contracts::enums::{PaymentMethod, PaymentStatus};
use contracts::shared::list_query::SearchOptions;

pub type PaymentListState = ListViewModel<Payment>;

pub fn create_state(store: &RecordStore, options: SearchOptions) -> PaymentListState {
    ListViewModel::from_source(store, options)
}

pub fn page_stats(state: &PaymentListState) -> PaymentStats {
    state.with_records(PaymentStats::compute)
}

pub fn status_options() -> Vec<FilterOption> {
    facet_options::<PaymentStatus>("All Status")
}

pub fn method_options() -> Vec<FilterOption> {
    facet_options::<PaymentMethod>("All Methods")
}

/// "Export Report" button of the payments page
pub fn export_report(
    exporter: &dyn ReportExporter,
    store: &RecordStore,
) -> Result<ExportReceipt, ExportError> {
    exporter.export(ReportKind::Payments, store.records())
}
