//! `orderflow-events` — domain events and in-process subscriber fan-out.

pub mod event;
pub mod handler;
pub mod listener;

pub use event::Event;
pub use handler::execute;
pub use listener::{BoxError, ListenerError, ListenerId, Listeners};
