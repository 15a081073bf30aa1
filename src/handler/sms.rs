use crate::handler::{DeliveryStatus, Handler, HandlerError};
use crate::notification::{Notification, Urgency};
use tracing::info;

/// Single GSM-7 segment.
const SEGMENT_LEN: usize = 160;

#[derive(Debug, Clone)]
pub struct SmsHandler {
    urgency: Urgency,
}

impl SmsHandler {
    pub fn new(urgency: Urgency) -> Self {
        Self { urgency }
    }
}

impl Default for SmsHandler {
    fn default() -> Self {
        Self::new(Urgency::Medium)
    }
}

impl Handler for SmsHandler {
    fn name(&self) -> &'static str {
        "sms"
    }

    fn supports(&self, notification: &Notification) -> bool {
        notification.urgency() == self.urgency
    }

    fn deliver(&self, notification: &Notification) -> Result<DeliveryStatus, HandlerError> {
        let segments = segment_count(notification.message());
        info!(channel = self.name(), segments, "sending sms");
        Ok(DeliveryStatus {
            notification: notification.clone(),
            deliverer: self.name(),
        })
    }
}

fn segment_count(message: &str) -> usize {
    message.chars().count().div_ceil(SEGMENT_LEN).max(1)
}
