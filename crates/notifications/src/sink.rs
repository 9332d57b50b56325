use std::io::Write;
use std::sync::{Arc, Mutex};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("failed to write notification: {0}")]
    Io(#[from] std::io::Error),

    /// In-memory sink lock was poisoned by a panicking writer.
    #[error("notification sink poisoned")]
    Poisoned,
}

/// Destination for formatted notification lines.
pub trait NotificationSink {
    fn deliver(&mut self, line: &str) -> Result<(), NotificationError>;
}

/// Writes each line to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl NotificationSink for StdoutSink {
    fn deliver(&mut self, line: &str) -> Result<(), NotificationError> {
        let mut out = std::io::stdout().lock();
        writeln!(out, "{line}")?;
        Ok(())
    }
}

/// Records lines in memory. Clones share the same buffer.
#[derive(Debug, Default, Clone)]
pub struct InMemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything delivered so far.
    pub fn lines(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl NotificationSink for InMemorySink {
    fn deliver(&mut self, line: &str) -> Result<(), NotificationError> {
        let mut lines = self.lines.lock().map_err(|_| NotificationError::Poisoned)?;
        lines.push(line.to_string());
        Ok(())
    }
}
