use orderflow_app::{run, sample_order};
use orderflow_notifications::{InMemorySink, NotificationError, NotificationSink};
use orderflow_sales::OrderStatus;

#[test]
fn sample_run_notifies_once_and_totals_481_5() {
    let sink = InMemorySink::new();

    let order = run(sink.clone()).unwrap();

    assert_eq!(sink.lines(), vec!["Notification: Processed"]);
    assert_eq!(order.status(), OrderStatus::Processed);
    assert_eq!(order.total_cost(), 481.5);
    assert_eq!(
        order.summary().to_string(),
        "Order Status: Processed, Total Cost: $481.5"
    );
}

#[test]
fn sample_order_starts_unprocessed() {
    let order = sample_order();

    assert_eq!(order.status(), OrderStatus::Unprocessed);
    assert_eq!(order.total_cost(), 0.0);
    assert_eq!(order.order_number().to_string(), "1");
    let names: Vec<&str> = order.products().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["The Great Gatsby", "Smartphone", "T-shirt"]);
}

struct ClosedSink;

impl NotificationSink for ClosedSink {
    fn deliver(&mut self, _line: &str) -> Result<(), NotificationError> {
        Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdout closed").into())
    }
}

#[test]
fn failed_notification_surfaces_as_error() {
    let err = run(ClosedSink).unwrap_err();

    assert_eq!(err.to_string(), "failed to process order 1");
    let chain: Vec<String> = err.chain().map(|e| e.to_string()).collect();
    assert!(chain.iter().any(|msg| msg.contains("stdout closed")));
}
