use std::collections::HashSet;

use lw_core::gateways::notify::{NotificationEvent, NotificationGateway, NotificationType};

/// Reports domain events to the log.
///
/// The backend has no subscription endpoint yet, so accepted
/// subscriptions only show up here.
#[derive(Debug, Clone)]
pub struct Notify {
    notify_on: HashSet<NotificationType>,
}

impl Notify {
    pub fn new(notify_on: HashSet<NotificationType>) -> Self {
        Self { notify_on }
    }

    fn skip(&self, ev: &NotificationEvent<'_>) -> bool {
        !self.notify_on.contains(&ev.kind())
    }
}

impl Default for Notify {
    fn default() -> Self {
        Self::new(
            [
                NotificationType::SubscriptionRequested,
                NotificationType::HistoryRequested,
            ]
            .into_iter()
            .collect(),
        )
    }
}

impl NotificationGateway for Notify {
    fn notify(&self, event: NotificationEvent<'_>) {
        use NotificationEvent as E;
        if self.skip(&event) {
            log::trace!("Skip {:?} notification", event.kind());
            return;
        }
        match event {
            E::SubscriptionRequested { config, alert_at } => {
                let provider = config
                    .provider
                    .map(|p| p.to_string())
                    .unwrap_or_else(|| "unknown provider".to_owned());
                let number = masked_phone_number(&config.phone_number);
                match alert_at {
                    Some(alert_at) => log::info!(
                        "Subscription for {} accepted: alerting {number} ({}, {provider}) at {alert_at}",
                        config.point,
                        config.phone_type,
                    ),
                    None => log::info!(
                        "Subscription for {} accepted: alerting {number} ({}, {provider}) {} {} before the next pass",
                        config.point,
                        config.phone_type,
                        config.advance_notice.amount,
                        config.advance_notice.unit,
                    ),
                }
            }
            E::HistoryRequested { query } => {
                log::info!(
                    "Historical scenes requested for {} from {} to {} (cloud cover <= {}%)",
                    query.point,
                    query.start,
                    query.end,
                    query.max_cloud_cover,
                );
            }
        }
    }
}

/// Keeps only the last four digits.
fn masked_phone_number(number: &str) -> String {
    let digits: Vec<char> = number.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return "<no phone number>".to_owned();
    }
    let visible = digits.len().saturating_sub(4);
    digits
        .iter()
        .enumerate()
        .map(|(i, digit)| if i < visible { '*' } else { *digit })
        .collect()
}
