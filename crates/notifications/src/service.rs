use crate::sink::{NotificationError, NotificationSink, StdoutSink};

/// Sends user-facing notifications as `Notification: {message}` lines.
#[derive(Debug, Default, Clone)]
pub struct NotificationService<S = StdoutSink> {
    sink: S,
}

impl NotificationService<StdoutSink> {
    pub fn new() -> Self {
        Self { sink: StdoutSink }
    }
}

impl<S: NotificationSink> NotificationService<S> {
    pub fn with_sink(sink: S) -> Self {
        Self { sink }
    }

    pub fn send_notification(&mut self, message: &str) -> Result<(), NotificationError> {
        let line = format!("Notification: {message}");
        tracing::debug!(%message, "sending notification");
        self.sink.deliver(&line)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
