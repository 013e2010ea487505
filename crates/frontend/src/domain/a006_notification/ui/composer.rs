use contracts::domain::a006_notification::{
    NotificationError, NotificationSender, OutgoingNotification, SendReceipt,
};
use contracts::enums::{FacetValue, RecipientGroup};
use leptos::prelude::*;
use std::sync::Arc;

/// Contents of the "Send notification" dialog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposerForm {
    pub title: String,
    pub message: String,
    pub recipient: RecipientGroup,
    pub is_open: bool,
}

impl ComposerForm {
    fn outgoing(&self) -> OutgoingNotification {
        OutgoingNotification {
            title: self.title.trim().to_string(),
            message: self.message.trim().to_string(),
            recipient: self.recipient,
        }
    }
}

/// ViewModel for the notification composer dialog
#[derive(Clone)]
pub struct NotificationComposer {
    pub form: RwSignal<ComposerForm>,
    pub error: RwSignal<Option<String>>,
    sender: Arc<dyn NotificationSender + Send + Sync>,
}

impl NotificationComposer {
    pub fn new(sender: Arc<dyn NotificationSender + Send + Sync>) -> Self {
        Self {
            form: RwSignal::new(ComposerForm::default()),
            error: RwSignal::new(None),
            sender,
        }
    }

    pub fn is_open(&self) -> bool {
        self.form.with(|f| f.is_open)
    }

    pub fn open(&self) {
        self.error.set(None);
        self.form.update(|f| f.is_open = true);
    }

    /// Closes without sending; the draft is kept for the next open
    pub fn close(&self) {
        self.form.update(|f| f.is_open = false);
    }

    pub fn set_title(&self, title: String) {
        self.form.update(|f| f.title = title);
    }

    pub fn set_message(&self, message: String) {
        self.form.update(|f| f.message = message);
    }

    /// Accepts a wire code from the recipient dropdown; unknown codes are ignored
    pub fn set_recipient(&self, code: &str) {
        match RecipientGroup::from_code(code) {
            Some(recipient) => self.form.update(|f| f.recipient = recipient),
            None => log::warn!("Unknown recipient group '{}'", code),
        }
    }

    /// Validates and sends the draft. On success the form is reset and closed.
    pub fn send(&self) -> Result<SendReceipt, NotificationError> {
        let outgoing = self.form.with(ComposerForm::outgoing);
        match self.sender.send(&outgoing) {
            Ok(receipt) => {
                self.form.set(ComposerForm::default());
                self.error.set(None);
                Ok(receipt)
            }
            Err(e) => {
                log::warn!("Notification not sent: {}", e);
                self.error.set(Some(e.to_string()));
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::RecordStore;
    use crate::shared::notify::LocalNotificationSender;

    struct FailingSender;

    impl NotificationSender for FailingSender {
        fn send(&self, n: &OutgoingNotification) -> Result<SendReceipt, NotificationError> {
            n.validate()?;
            Err(NotificationError::Delivery("gateway offline".into()))
        }
    }

    fn composer() -> NotificationComposer {
        let store = RecordStore::sample().unwrap();
        NotificationComposer::new(Arc::new(LocalNotificationSender::new(&store)))
    }

    #[test]
    fn test_send_resets_and_closes() {
        let composer = composer();
        composer.open();
        composer.set_title("Holiday offer".into());
        composer.set_message("20% off all rides this weekend".into());
        composer.set_recipient("customers");

        let receipt = composer.send().unwrap();
        assert_eq!(receipt.recipients_count, 2);
        assert_eq!(receipt.describe(), "Notification sent to customers");
        assert!(!composer.is_open());
        assert_eq!(composer.form.get(), ComposerForm::default());
    }

    #[test]
    fn test_missing_fields_keep_dialog_open() {
        let composer = composer();
        composer.open();
        composer.set_title("Only a title".into());

        assert_eq!(composer.send(), Err(NotificationError::MissingFields));
        assert!(composer.is_open());
        assert_eq!(
            composer.error.get().as_deref(),
            Some("Please fill in all required fields")
        );
        assert_eq!(composer.form.with(|f| f.title.clone()), "Only a title");
    }

    #[test]
    fn test_unknown_recipient_is_ignored() {
        let composer = composer();
        composer.set_recipient("drivers");
        composer.set_recipient("admins");
        assert_eq!(composer.form.with(|f| f.recipient), RecipientGroup::Drivers);
    }

    #[test]
    fn test_delivery_failure_keeps_draft() {
        let composer = NotificationComposer::new(Arc::new(FailingSender));
        composer.open();
        composer.set_title("Fuel surcharge".into());
        composer.set_message("Fares go up by 5%".into());

        assert!(matches!(composer.send(), Err(NotificationError::Delivery(_))));
        assert!(composer.is_open());
        assert_eq!(
            composer.error.get().as_deref(),
            Some("Delivery failed: gateway offline")
        );
    }
}
