use crate::enums::{FacetValue, RecipientGroup};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Notification composed in the admin panel, not yet sent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingNotification {
    pub title: String,
    pub message: String,
    pub recipient: RecipientGroup,
}

impl OutgoingNotification {
    /// Title and message are both required
    pub fn validate(&self) -> Result<(), NotificationError> {
        if self.title.trim().is_empty() || self.message.trim().is_empty() {
            return Err(NotificationError::MissingFields);
        }
        Ok(())
    }
}

/// Outcome of a successful send
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendReceipt {
    pub recipient: RecipientGroup,
    pub recipients_count: u32,
}

impl SendReceipt {
    /// Text for the confirmation toast
    pub fn describe(&self) -> String {
        format!("Notification sent to {}", self.recipient.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotificationError {
    #[error("Please fill in all required fields")]
    MissingFields,

    #[error("Delivery failed: {0}")]
    Delivery(String),
}

/// Delivers notifications. Injected into the composer so that a real
/// gateway can replace the local one without touching callers.
pub trait NotificationSender {
    fn send(&self, notification: &OutgoingNotification) -> Result<SendReceipt, NotificationError>;
}
