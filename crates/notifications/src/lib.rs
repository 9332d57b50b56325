//! Notification delivery.
//!
//! `NotificationService` formats messages; a `NotificationSink` decides where
//! the resulting lines go (stdout in production, memory in tests/dev).

pub mod service;
pub mod sink;

pub use service::NotificationService;
pub use sink::{InMemorySink, NotificationError, NotificationSink, StdoutSink};
