//! In-process subscriber registry with synchronous fan-out.
//!
//! Unlike a bus, nothing is queued: `notify` calls every registered callback
//! right away, in registration order, on the caller's thread.

use thiserror::Error;
use tracing::warn;

/// Error type returned by subscriber callbacks.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Handle returned by [`Listeners::subscribe`], used to unsubscribe.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl core::fmt::Display for ListenerId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Error)]
pub enum ListenerError {
    /// A callback returned an error; callbacks after it were not invoked.
    #[error("listener {id} failed: {source}")]
    Failed {
        id: ListenerId,
        #[source]
        source: BoxError,
    },
}

/// Ordered list of callbacks receiving `&M`.
pub struct Listeners<M: ?Sized> {
    callbacks: Vec<(ListenerId, Box<dyn FnMut(&M) -> Result<(), BoxError>>)>,
    next_id: u64,
}

impl<M: ?Sized> Listeners<M> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback. It only sees messages published after this call.
    pub fn subscribe<F>(&mut self, callback: F) -> ListenerId
    where
        F: FnMut(&M) -> Result<(), BoxError> + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.callbacks.push((id, Box::new(callback)));
        id
    }

    /// Remove a callback. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(existing, _)| *existing != id);
        self.callbacks.len() != before
    }

    /// Invoke every callback with `message`.
    ///
    /// Stops at the first failure and returns it; there is no isolation
    /// between callbacks.
    pub fn notify(&mut self, message: &M) -> Result<(), ListenerError> {
        for (id, callback) in self.callbacks.iter_mut() {
            if let Err(source) = callback(message) {
                warn!(listener = %id, error = %source, "listener failed, stopping fan-out");
                return Err(ListenerError::Failed { id: *id, source });
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl<M: ?Sized> Default for Listeners<M> {
    fn default() -> Self {
        Self {
            callbacks: Vec::new(),
            next_id: 0,
        }
    }
}

impl<M: ?Sized> core::fmt::Debug for Listeners<M> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.callbacks.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder(
        log: Rc<RefCell<Vec<String>>>,
        tag: &'static str,
    ) -> impl FnMut(&str) -> Result<(), BoxError> {
        move |message: &str| {
            log.borrow_mut().push(format!("{tag}:{message}"));
            Ok(())
        }
    }

    #[test]
    fn notify_reaches_callbacks_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut listeners: Listeners<str> = Listeners::new();
        listeners.subscribe(recorder(Rc::clone(&log), "a"));
        listeners.subscribe(recorder(Rc::clone(&log), "b"));

        listeners.notify("Processed").unwrap();

        assert_eq!(*log.borrow(), vec!["a:Processed", "b:Processed"]);
    }

    #[test]
    fn empty_registry_notifies_nobody() {
        let mut listeners: Listeners<str> = Listeners::default();
        assert!(listeners.is_empty());
        listeners.notify("Processed").unwrap();
    }

    #[test]
    fn late_subscriber_misses_earlier_messages() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut listeners: Listeners<str> = Listeners::new();
        listeners.subscribe(recorder(Rc::clone(&log), "early"));
        listeners.notify("first").unwrap();

        listeners.subscribe(recorder(Rc::clone(&log), "late"));
        assert_eq!(*log.borrow(), vec!["early:first"]);

        listeners.notify("second").unwrap();
        assert_eq!(
            *log.borrow(),
            vec!["early:first", "early:second", "late:second"]
        );
    }

    #[test]
    fn unsubscribe_removes_only_that_callback() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut listeners: Listeners<str> = Listeners::new();
        let a = listeners.subscribe(recorder(Rc::clone(&log), "a"));
        listeners.subscribe(recorder(Rc::clone(&log), "b"));

        assert!(listeners.unsubscribe(a));
        assert!(!listeners.unsubscribe(a));
        assert_eq!(listeners.len(), 1);

        listeners.notify("x").unwrap();
        assert_eq!(*log.borrow(), vec!["b:x"]);
    }

    #[test]
    fn failure_stops_fan_out_and_reports_listener() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut listeners: Listeners<str> = Listeners::new();
        listeners.subscribe(recorder(Rc::clone(&log), "a"));
        let failing = listeners.subscribe(|_: &str| Err("sink closed".into()));
        listeners.subscribe(recorder(Rc::clone(&log), "c"));

        let err = listeners.notify("Processed").unwrap_err();
        match &err {
            ListenerError::Failed { id, source } => {
                assert_eq!(*id, failing);
                assert_eq!(source.to_string(), "sink closed");
            }
        }
        assert_eq!(err.to_string(), "listener #1 failed: sink closed");
        assert_eq!(*log.borrow(), vec!["a:Processed"]);
    }
}
