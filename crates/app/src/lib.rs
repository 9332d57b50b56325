//! Sample order wiring for the `orderflow` binary.

use anyhow::Context;

use orderflow_notifications::{NotificationService, NotificationSink};
use orderflow_products::Product;
use orderflow_sales::{Order, OrderNumber, OrderProcessor};

/// The three demo products: a book, a phone and a shirt.
pub fn sample_products() -> Vec<Product> {
    vec![
        Product::book("The Great Gatsby", 20.0, 300),
        Product::electronics("Smartphone", 500.0, "128GB"),
        Product::clothing("T-shirt", 15.0, "M"),
    ]
}

pub fn sample_order() -> Order {
    Order::new(OrderNumber::new(1), sample_products())
}

/// Build the sample order, route its status changes to a notification
/// service over `sink`, and process it.
pub fn run<S>(sink: S) -> anyhow::Result<Order>
where
    S: NotificationSink + 'static,
{
    let mut order = sample_order();
    let order_number = order.order_number();
    let processor = OrderProcessor::new();
    let mut notifications = NotificationService::with_sink(sink);

    order.subscribe(move |status: &str| {
        notifications.send_notification(status).map_err(Into::into)
    });

    processor
        .process_order(&mut order)
        .with_context(|| format!("failed to process order {order_number}"))?;

    Ok(order)
}
