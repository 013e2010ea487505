use super::Notification;
use crate::enums::NotificationStatus;
use crate::shared::list_query::aggregate::count_where;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationStats {
    pub sent: usize,
    pub total_recipients: u64,
    pub scheduled: usize,
}

impl NotificationStats {
    pub fn compute(notifications: &[Notification]) -> Self {
        Self {
            sent: count_where(notifications, |n| n.status == NotificationStatus::Sent),
            total_recipients: notifications.iter().map(|n| u64::from(n.recipients_count)).sum(),
            scheduled: count_where(notifications, |n| n.status == NotificationStatus::Scheduled),
        }
    }
}
