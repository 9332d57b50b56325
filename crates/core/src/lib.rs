//! `orderflow-core` — domain building blocks shared by the order crates.
//!
//! Pure domain traits only; nothing here performs IO.

pub mod aggregate;

pub use aggregate::{Aggregate, AggregateRoot};
