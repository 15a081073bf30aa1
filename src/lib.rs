//! Urgency-based notification routing.
//!
//! A [`Dispatcher`] walks an ordered list of [`Handler`]s and hands each
//! [`Notification`] to the first one that supports it and delivers it
//! without error. Failed deliveries fall through to the next handler;
//! only exhausting the list is reported to the caller.

pub mod cli;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod handler;
pub mod notification;

pub use dispatcher::{DeliveryFailure, DispatchError, Dispatcher};
pub use handler::{DeliveryStatus, Handler, HandlerError, HandlerKind};
pub use notification::{Notification, Urgency};
