use anyhow::Result;

use orderflow_notifications::StdoutSink;

fn main() -> Result<()> {
    orderflow_observability::init();
    tracing::info!("orderflow starting");

    let order = orderflow_app::run(StdoutSink)?;
    println!("{}", order.summary());

    Ok(())
}
