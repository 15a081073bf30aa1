use crate::notification::{Notification, Urgency};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

pub mod chat;
pub mod email;
pub mod sms;

pub use chat::ChatHandler;
pub use email::EmailHandler;
pub use sms::SmsHandler;

/// Record of a successful delivery. Only a handler that accepted the
/// notification builds one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryStatus {
    pub notification: Notification,
    pub deliverer: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HandlerError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("delivery timed out after {0:?}")]
    Timeout(Duration),
    #[error("handler panicked during delivery")]
    Panicked,
    #[error("handler exited without reporting a result")]
    Disconnected,
    #[error("handler reported a status for another delivery (deliverer {deliverer})")]
    ForeignStatus { deliverer: &'static str },
}

pub trait Handler: Send + Sync {
    fn name(&self) -> &'static str;
    fn supports(&self, notification: &Notification) -> bool;
    fn deliver(&self, notification: &Notification) -> Result<DeliveryStatus, HandlerError>;
}

/// Built-in channels, selectable by name from config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandlerKind {
    Email,
    Sms,
    Chat,
}

impl HandlerKind {
    pub const ALL: [HandlerKind; 3] = [HandlerKind::Email, HandlerKind::Sms, HandlerKind::Chat];

    pub fn as_str(self) -> &'static str {
        match self {
            HandlerKind::Email => "email",
            HandlerKind::Sms => "sms",
            HandlerKind::Chat => "chat",
        }
    }

    pub fn default_urgency(self) -> Urgency {
        match self {
            HandlerKind::Email => Urgency::Low,
            HandlerKind::Sms => Urgency::Medium,
            HandlerKind::Chat => Urgency::High,
        }
    }

    pub fn build(self, urgency: Urgency) -> Arc<dyn Handler> {
        match self {
            HandlerKind::Email => Arc::new(EmailHandler::new(urgency)),
            HandlerKind::Sms => Arc::new(SmsHandler::new(urgency)),
            HandlerKind::Chat => Arc::new(ChatHandler::new(urgency)),
        }
    }
}

impl fmt::Display for HandlerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown handler: {0}")]
pub struct UnknownHandler(pub String);

impl FromStr for HandlerKind {
    type Err = UnknownHandler;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HandlerKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownHandler(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bands_partition_urgency() {
        for urgency in Urgency::ALL {
            let notification = Notification::new("x", urgency);
            let claimed: Vec<_> = HandlerKind::ALL
                .into_iter()
                .map(|kind| kind.build(kind.default_urgency()))
                .filter(|handler| handler.supports(&notification))
                .map(|handler| handler.name())
                .collect();
            assert_eq!(claimed.len(), 1, "{urgency} claimed by {claimed:?}");
        }
    }

    #[test]
    fn kind_parses_from_name() {
        assert_eq!("SMS".parse::<HandlerKind>().unwrap(), HandlerKind::Sms);
        assert_eq!("chat".parse::<HandlerKind>().unwrap(), HandlerKind::Chat);
        let err = "pager".parse::<HandlerKind>().unwrap_err();
        assert_eq!(err.to_string(), "unknown handler: pager");
    }

    #[test]
    fn built_handler_reports_kind_name() {
        for kind in HandlerKind::ALL {
            assert_eq!(kind.build(Urgency::Low).name(), kind.as_str());
        }
    }
}
