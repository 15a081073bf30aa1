use crate::handler::{DeliveryStatus, Handler, HandlerError};
use crate::notification::{Notification, Urgency};
use tracing::info;

const SUBJECT_LEN: usize = 60;

#[derive(Debug, Clone)]
pub struct EmailHandler {
    urgency: Urgency,
}

impl EmailHandler {
    pub fn new(urgency: Urgency) -> Self {
        Self { urgency }
    }
}

impl Default for EmailHandler {
    fn default() -> Self {
        Self::new(Urgency::Low)
    }
}

impl Handler for EmailHandler {
    fn name(&self) -> &'static str {
        "email"
    }

    fn supports(&self, notification: &Notification) -> bool {
        notification.urgency() == self.urgency
    }

    fn deliver(&self, notification: &Notification) -> Result<DeliveryStatus, HandlerError> {
        let subject = subject_line(notification.message());
        info!(channel = self.name(), subject = %subject, "sending email");
        Ok(DeliveryStatus {
            notification: notification.clone(),
            deliverer: self.name(),
        })
    }
}

fn subject_line(message: &str) -> String {
    let first = message.lines().next().unwrap_or_default();
    if first.chars().count() <= SUBJECT_LEN {
        return first.to_string();
    }
    let mut subject: String = first.chars().take(SUBJECT_LEN - 3).collect();
    subject.push_str("...");
    subject
}
