use crate::handler::{DeliveryStatus, Handler, HandlerError};
use crate::notification::{Notification, Urgency};
use tracing::info;

#[derive(Debug, Clone)]
pub struct ChatHandler {
    urgency: Urgency,
}

impl ChatHandler {
    pub fn new(urgency: Urgency) -> Self {
        Self { urgency }
    }
}

impl Default for ChatHandler {
    fn default() -> Self {
        Self::new(Urgency::High)
    }
}

impl Handler for ChatHandler {
    fn name(&self) -> &'static str {
        "chat"
    }

    fn supports(&self, notification: &Notification) -> bool {
        notification.urgency() == self.urgency
    }

    fn deliver(&self, notification: &Notification) -> Result<DeliveryStatus, HandlerError> {
        info!(
            channel = self.name(),
            len = notification.message().len(),
            "posting chat message"
        );
        Ok(DeliveryStatus {
            notification: notification.clone(),
            deliverer: self.name(),
        })
    }
}
