use lw_entities::{notification::NotificationConfig, pass::SceneQuery};
use time::OffsetDateTime;

#[derive(Debug, Clone, Copy)]
pub enum NotificationEvent<'a> {
    SubscriptionRequested {
        config: &'a NotificationConfig,
        /// The next pass minus the configured advance notice, if known.
        alert_at: Option<OffsetDateTime>,
    },
    HistoryRequested {
        query: &'a SceneQuery,
    },
}

impl NotificationEvent<'_> {
    pub const fn kind(&self) -> NotificationType {
        match self {
            Self::SubscriptionRequested { .. } => NotificationType::SubscriptionRequested,
            Self::HistoryRequested { .. } => NotificationType::HistoryRequested,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationType {
    SubscriptionRequested,
    HistoryRequested,
}

/// Receives domain events.
///
/// Delivery is fire-and-forget: implementations must not
/// block and report their failures on their own.
pub trait NotificationGateway {
    fn notify(&self, event: NotificationEvent<'_>);
}
