//! A configurable handler that records how often it was asked to deliver.

use notifroute::{DeliveryStatus, Handler, HandlerError, Notification, Urgency};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum Behavior {
    Succeed,
    Fail,
    Stall(Duration),
    /// Returns a status claiming another deliverer and notification.
    Misreport,
}

#[derive(Debug, Clone)]
pub struct MockHandler {
    pub name: &'static str,
    pub urgencies: Vec<Urgency>,
    pub behavior: Behavior,
    pub deliveries: Arc<AtomicUsize>,
}

impl MockHandler {
    pub fn new(name: &'static str, urgencies: &[Urgency]) -> Self {
        Self {
            name,
            urgencies: urgencies.to_vec(),
            behavior: Behavior::Succeed,
            deliveries: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing(mut self) -> Self {
        self.behavior = Behavior::Fail;
        self
    }

    pub fn stalling(mut self, delay: Duration) -> Self {
        self.behavior = Behavior::Stall(delay);
        self
    }

    pub fn misreporting(mut self) -> Self {
        self.behavior = Behavior::Misreport;
        self
    }

    pub fn delivery_count(&self) -> usize {
        self.deliveries.load(Ordering::SeqCst)
    }

    pub fn shared(&self) -> Arc<dyn Handler> {
        Arc::new(self.clone())
    }
}

impl Handler for MockHandler {
    fn name(&self) -> &'static str {
        self.name
    }

    fn supports(&self, notification: &Notification) -> bool {
        self.urgencies.contains(&notification.urgency())
    }

    fn deliver(&self, notification: &Notification) -> Result<DeliveryStatus, HandlerError> {
        self.deliveries.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            Behavior::Succeed => {}
            Behavior::Fail => {
                return Err(HandlerError::Transport(format!("{} is down", self.name)));
            }
            Behavior::Stall(delay) => thread::sleep(*delay),
            Behavior::Misreport => {
                return Ok(DeliveryStatus {
                    notification: Notification::new("other", Urgency::Low),
                    deliverer: "email",
                });
            }
        }
        Ok(DeliveryStatus {
            notification: notification.clone(),
            deliverer: self.name,
        })
    }
}
