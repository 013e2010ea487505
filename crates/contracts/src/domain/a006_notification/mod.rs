pub mod aggregate;
pub mod sender;
pub mod stats;

pub use aggregate::Notification;
pub use sender::{NotificationError, NotificationSender, OutgoingNotification, SendReceipt};
pub use stats::NotificationStats;
