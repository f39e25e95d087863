mod app_config;

use std::time::Duration;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use app_config::Config;
use otrack_catalog::{InventoryMonitor, PRODUCTS};
use otrack_ingest::{InboxScanner, MockOrderGenerator};
use otrack_order::{ErpPublisher, FulfillmentBoard};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "otrack_agent=info,otrack_ingest=info,otrack_order=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().expect("Failed to load config");
    info!(orders = config.scan.order_count, "Starting omni-channel order tracker agent");

    // Scan the simulated inboxes, reporting progress as the steps run
    let scanner = InboxScanner::new(MockOrderGenerator::new())
        .with_tick_interval(Duration::from_millis(config.scan.tick_interval_ms));
    let job = scanner.start(config.scan.order_count);

    let mut progress = job.progress();
    let reporter = tokio::spawn(async move {
        let mut last_step = usize::MAX;
        while progress.changed().await.is_ok() {
            let snapshot = progress.borrow().clone();
            if snapshot.complete {
                break;
            }
            if snapshot.step_index != last_step {
                last_step = snapshot.step_index;
                if let Some(message) = &snapshot.message {
                    info!(
                        step = snapshot.step_index + 1,
                        of = snapshot.step_count,
                        "{message}"
                    );
                }
            }
        }
    });

    let mut orders = job.orders().await.expect("Inbox scan failed");
    let _ = reporter.await;

    // Seed inventory for the catalog, then publish a few orders to the ERP
    let mut monitor = InventoryMonitor::new();
    for product in PRODUCTS {
        monitor.initialize(product.code, product.name, 200, 120);
    }

    let board = FulfillmentBoard::new();
    let publisher = ErpPublisher::new(Duration::from_millis(config.publish.delay_ms));

    let publish_count = config.publish.count.min(orders.len());
    for order in orders.iter_mut().take(publish_count) {
        match publisher.publish(order, &board).await {
            Ok(entry) => {
                let base_code = entry.product_code.split('-').next().unwrap_or("");
                match monitor.record_demand(base_code, entry.quantity) {
                    Ok(remaining) => {
                        info!(order_id = %entry.id, product = base_code, remaining, "demand recorded")
                    }
                    Err(e) => warn!(order_id = %entry.id, "inventory not tracked: {e}"),
                }
            }
            Err(e) => warn!("publish failed: {e}"),
        }
    }

    // Toggle the first published order through fulfillment
    if let Some(first) = board.orders().first().map(|o| o.id.clone()) {
        board.mark_as_fulfilled(&first);
    }

    info!(
        total = board.len(),
        pending = board.pending_count(),
        fulfilled = board.fulfilled_count(),
        "fulfillment queue"
    );

    for alert in monitor.alerts() {
        warn!(
            product = %alert.product_code,
            kind = ?alert.kind,
            severity = ?alert.severity,
            current = alert.current,
            threshold = alert.threshold,
            "inventory alert"
        );
    }
}
