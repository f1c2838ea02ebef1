//! User-facing notifications.
//!
//! The editor never shows anything itself; it hands [`Notification`]s to a
//! [`Notifier`] supplied by the host (toast, alert, system notification).

use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self::titled(NotificationKind::Success, "Success", message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::titled(NotificationKind::Error, "Error", message)
    }

    pub fn titled(kind: NotificationKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Sink for notifications.
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

/// Collects notifications for the host to drain.
impl Notifier for Vec<Notification> {
    fn notify(&mut self, notification: Notification) {
        self.push(notification);
    }
}

/// Writes notifications to the log. Used by headless hosts.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, notification: Notification) {
        info!(
            kind = ?notification.kind,
            title = %notification.title,
            "{}",
            notification.message
        );
    }
}
