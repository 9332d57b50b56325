//! Sales orders domain module.
//!
//! Orders aggregate products into a total cost and notify subscribers when
//! their status changes. Deterministic domain logic plus in-process callbacks;
//! no storage.

pub mod order;
pub mod processor;

pub use order::{
    Order, OrderCommand, OrderError, OrderEvent, OrderNumber, OrderProcessed, OrderStatus,
    OrderSummary, ProcessOrder,
};
pub use processor::OrderProcessor;
