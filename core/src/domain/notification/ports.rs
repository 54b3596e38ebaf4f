use crate::domain::notification::entities::Notification;

/// Channel for user-facing notifications.
///
/// Purely informational: nothing in the analysis contract depends on a
/// notification being delivered.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}
