use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use orderflow_core::{Aggregate, AggregateRoot};
use orderflow_events::{BoxError, Event, ListenerError, ListenerId, Listeners, execute};
use orderflow_products::Product;

/// Order number (as shown to customers).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderNumber(pub u32);

impl OrderNumber {
    pub fn new(number: u32) -> Self {
        Self(number)
    }
}

impl core::fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Order status lifecycle: `Unprocessed -> Processed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Unprocessed,
    Processed,
}

impl OrderStatus {
    /// String form handed to status-change listeners.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Unprocessed => "Unprocessed",
            OrderStatus::Processed => "Processed",
        }
    }
}

impl core::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum OrderError {
    #[error("command for order {command} was sent to order {order}")]
    OrderNumberMismatch {
        order: OrderNumber,
        command: OrderNumber,
    },

    /// A status-change listener failed. The order state was already updated.
    #[error("status change notification failed: {0}")]
    Notification(#[from] ListenerError),
}

/// Aggregate root: Order.
///
/// `total_cost` and `status` are written only by applying `OrderEvent`s, which
/// in turn only `process()` produces.
#[derive(Debug)]
pub struct Order {
    order_number: OrderNumber,
    products: Vec<Product>,
    total_cost: f64,
    status: OrderStatus,
    listeners: Listeners<str>,
    version: u64,
}

impl Order {
    pub fn new(order_number: OrderNumber, products: Vec<Product>) -> Self {
        Self {
            order_number,
            products,
            total_cost: 0.0,
            status: OrderStatus::Unprocessed,
            listeners: Listeners::new(),
            version: 0,
        }
    }

    pub fn order_number(&self) -> OrderNumber {
        self.order_number
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Append a product. The total is not recomputed until the next `process()`.
    pub fn add_product(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Sum of product costs as of the last `process()`; `0.0` before that.
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// Register a status-change listener.
    ///
    /// Listeners are called synchronously, in registration order, with the new
    /// status string. A listener registered after `process()` is not called
    /// for that earlier change.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&str) -> Result<(), BoxError> + 'static,
    {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Recompute the total, mark the order processed and notify listeners.
    ///
    /// Calling it again recomputes the same total and notifies again. If a
    /// listener fails, the remaining listeners are skipped and the error is
    /// returned; the new total and status stay in place.
    pub fn process(&mut self) -> Result<(), OrderError> {
        let command = OrderCommand::ProcessOrder(ProcessOrder {
            order_number: self.order_number,
            occurred_at: Utc::now(),
        });

        let events = execute(self, &command)?;

        for event in &events {
            match event {
                OrderEvent::OrderProcessed(e) => {
                    tracing::info!(
                        order = %e.order_number,
                        status = %e.status,
                        total_cost = e.total_cost,
                        "order status changed"
                    );
                    self.listeners.notify(e.status.as_str())?;
                }
            }
        }

        Ok(())
    }

    /// One-line summary: `Order Status: {status}, Total Cost: ${total}`.
    pub fn summary(&self) -> OrderSummary<'_> {
        OrderSummary(self)
    }
}

/// Display adapter returned by [`Order::summary`].
pub struct OrderSummary<'a>(&'a Order);

impl core::fmt::Display for OrderSummary<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Order Status: {}, Total Cost: ${}",
            self.0.status, self.0.total_cost
        )
    }
}

impl AggregateRoot for Order {
    type Id = OrderNumber;

    fn id(&self) -> &Self::Id {
        &self.order_number
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Command: ProcessOrder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessOrder {
    pub order_number: OrderNumber,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderCommand {
    ProcessOrder(ProcessOrder),
}

/// Event: OrderProcessed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderProcessed {
    pub order_number: OrderNumber,
    pub total_cost: f64,
    pub status: OrderStatus,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OrderEvent {
    OrderProcessed(OrderProcessed),
}

impl Event for OrderEvent {
    fn event_type(&self) -> &'static str {
        match self {
            OrderEvent::OrderProcessed(_) => "sales.order.processed",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            OrderEvent::OrderProcessed(e) => e.occurred_at,
        }
    }
}

impl Aggregate for Order {
    type Command = OrderCommand;
    type Event = OrderEvent;
    type Error = OrderError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            OrderEvent::OrderProcessed(e) => {
                self.total_cost = e.total_cost;
                self.status = e.status;
            }
        }

        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            OrderCommand::ProcessOrder(cmd) => self.handle_process(cmd),
        }
    }
}

impl Order {
    fn handle_process(&self, cmd: &ProcessOrder) -> Result<Vec<OrderEvent>, OrderError> {
        if cmd.order_number != self.order_number {
            return Err(OrderError::OrderNumberMismatch {
                order: self.order_number,
                command: cmd.order_number,
            });
        }

        Ok(vec![OrderEvent::OrderProcessed(OrderProcessed {
            order_number: self.order_number,
            total_cost: total_cost_of(&self.products),
            status: OrderStatus::Processed,
            occurred_at: cmd.occurred_at,
        })])
    }
}

// Folds from +0.0: `Iterator::sum` starts at -0.0, which would print as "-0"
// for an empty order.
fn total_cost_of(products: &[Product]) -> f64 {
    products.iter().fold(0.0, |total, product| {
        let cost = product.compute_cost();
        tracing::debug!(
            product = %product.name,
            category = product.category_label(),
            price = product.price,
            cost,
            "priced product"
        );
        total + cost
    })
}
