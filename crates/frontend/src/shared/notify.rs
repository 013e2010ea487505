//! Local stand-ins for outbound collaborators.
//!
//! There is no gateway behind the admin panel yet; these implementations
//! resolve immediately and leave a trace in the log.

use super::data::RecordStore;
use contracts::domain::a006_notification::{
    NotificationError, NotificationSender, OutgoingNotification, SendReceipt,
};
use contracts::domain::a007_platform_settings::{
    PlatformSettings, SettingsError, SettingsSection, SettingsSink,
};
use contracts::domain::a008_report::{ExportError, ExportReceipt, ReportExporter, ReportKind};
use contracts::enums::{FacetValue, RecipientGroup};
use contracts::shared::record_set::RecordSet;

/// Sender that counts recipients from the record store and logs the message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalNotificationSender {
    drivers: u32,
    customers: u32,
}

impl LocalNotificationSender {
    pub fn new(store: &RecordStore) -> Self {
        Self {
            drivers: store.drivers().len() as u32,
            customers: store.customers().len() as u32,
        }
    }

    fn audience(&self, recipient: RecipientGroup) -> u32 {
        match recipient {
            RecipientGroup::All => self.drivers + self.customers,
            RecipientGroup::Drivers => self.drivers,
            RecipientGroup::Customers => self.customers,
        }
    }
}

impl NotificationSender for LocalNotificationSender {
    fn send(&self, notification: &OutgoingNotification) -> Result<SendReceipt, NotificationError> {
        notification.validate()?;
        let receipt = SendReceipt {
            recipient: notification.recipient,
            recipients_count: self.audience(notification.recipient),
        };
        log::info!(
            "Notification '{}' sent to {} ({} recipients)",
            notification.title,
            notification.recipient.code(),
            receipt.recipients_count
        );
        Ok(receipt)
    }
}

/// Sink that only logs what would be saved
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSettingsSink;

impl SettingsSink for LocalSettingsSink {
    fn save(&self, section: SettingsSection, settings: &PlatformSettings) -> Result<(), SettingsError> {
        log::info!(
            "{} settings saved ({} fares, {} promo codes, toggles {:?})",
            section.display_name(),
            settings.fares.len(),
            settings.promo_codes.len(),
            settings.toggles
        );
        Ok(())
    }
}

/// Exporter that counts the rows a report would hold and logs the request
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalReportExporter;

impl ReportExporter for LocalReportExporter {
    fn export(&self, kind: ReportKind, records: &RecordSet) -> Result<ExportReceipt, ExportError> {
        let receipt = ExportReceipt {
            kind,
            rows: kind.row_count(records),
        };
        log::info!("{} report export requested ({} rows)", kind.display_name(), receipt.rows);
        Ok(receipt)
    }
}
