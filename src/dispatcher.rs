use crate::handler::{DeliveryStatus, Handler, HandlerError};
use crate::notification::{Notification, Urgency};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;
use tracing::{debug, info, warn};

/// A handler that accepted a notification but failed to deliver it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryFailure {
    pub handler: &'static str,
    pub error: HandlerError,
}

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("no handler delivered {urgency} notification ({} failed attempt(s))", .failures.len())]
    NoHandlerFound {
        urgency: Urgency,
        failures: Vec<DeliveryFailure>,
    },
}

/// Routes each notification to the first handler, in construction order,
/// that both supports it and delivers it.
pub struct Dispatcher {
    handlers: Vec<Arc<dyn Handler>>,
    timeout: Option<Duration>,
}

impl Dispatcher {
    pub fn new(handlers: Vec<Arc<dyn Handler>>) -> Self {
        Self {
            handlers,
            timeout: None,
        }
    }

    /// Bounds each `deliver` call; expiry counts as a failed delivery.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn handlers(&self) -> impl Iterator<Item = &dyn Handler> {
        self.handlers.iter().map(|handler| handler.as_ref())
    }

    pub fn send(&self, notification: Notification) -> Result<DeliveryStatus, DispatchError> {
        let mut failures = Vec::new();

        for handler in &self.handlers {
            if !handler.supports(&notification) {
                debug!(handler = handler.name(), urgency = %notification.urgency(), "declined");
                continue;
            }

            let result = self
                .attempt(handler, &notification)
                .and_then(|status| verify(handler.as_ref(), &notification, status));
            match result {
                Ok(status) => {
                    info!(
                        handler = status.deliverer,
                        urgency = %notification.urgency(),
                        "delivered"
                    );
                    return Ok(status);
                }
                Err(error) => {
                    warn!(
                        handler = handler.name(),
                        error = %error,
                        "delivery failed, trying next handler"
                    );
                    failures.push(DeliveryFailure {
                        handler: handler.name(),
                        error,
                    });
                }
            }
        }

        Err(DispatchError::NoHandlerFound {
            urgency: notification.urgency(),
            failures,
        })
    }

    fn attempt(
        &self,
        handler: &Arc<dyn Handler>,
        notification: &Notification,
    ) -> Result<DeliveryStatus, HandlerError> {
        let Some(timeout) = self.timeout else {
            return guarded_deliver(handler.as_ref(), notification);
        };

        let (tx, rx) = mpsc::channel();
        let worker = Arc::clone(handler);
        let owned = notification.clone();
        thread::spawn(move || {
            // Receiver is gone once the attempt timed out.
            let _ = tx.send(guarded_deliver(worker.as_ref(), &owned));
        });

        match rx.recv_timeout(timeout) {
            Ok(result) => result,
            Err(RecvTimeoutError::Timeout) => Err(HandlerError::Timeout(timeout)),
            Err(RecvTimeoutError::Disconnected) => Err(HandlerError::Disconnected),
        }
    }
}

/// Panics inside a handler are delivery failures, never aborts of the chain.
fn guarded_deliver(
    handler: &dyn Handler,
    notification: &Notification,
) -> Result<DeliveryStatus, HandlerError> {
    panic::catch_unwind(AssertUnwindSafe(|| handler.deliver(notification)))
        .unwrap_or(Err(HandlerError::Panicked))
}

/// A status only counts if it names the accepting handler and the
/// notification it was given.
fn verify(
    handler: &dyn Handler,
    notification: &Notification,
    status: DeliveryStatus,
) -> Result<DeliveryStatus, HandlerError> {
    if status.deliverer != handler.name() || status.notification != *notification {
        return Err(HandlerError::ForeignStatus {
            deliverer: status.deliverer,
        });
    }
    Ok(status)
}
