use crate::order::{Order, OrderError};

/// Entry point for processing orders; delegates to [`Order::process`].
#[derive(Debug, Default, Clone, Copy)]
pub struct OrderProcessor;

impl OrderProcessor {
    pub fn new() -> Self {
        Self
    }

    pub fn process_order(&self, order: &mut Order) -> Result<(), OrderError> {
        tracing::debug!(
            order = %order.order_number(),
            products = order.products().len(),
            "processing order"
        );
        order.process()
    }
}
