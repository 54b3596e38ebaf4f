use tracing::{info, warn};

use crate::domain::notification::{
    entities::{Notification, NotificationVariant},
    ports::Notifier,
};

/// Writes notifications to the log. Used where no user is watching, such as
/// the HTTP endpoint.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.variant {
            NotificationVariant::Default => info!(
                title = %notification.title,
                description = %notification.description,
                "notification"
            ),
            NotificationVariant::Destructive => warn!(
                title = %notification.title,
                description = %notification.description,
                "notification"
            ),
        }
    }
}
