use std::sync::Arc;

use tokio::sync::watch;
use tracing::info;

use crate::models::{FulfillmentOrder, FulfillmentStatus};
use otrack_shared::ParsedOrder;

/// Process-wide fulfillment queue. Every mutation builds a fresh list and
/// swaps it in whole, so readers only ever observe complete snapshots.
pub struct FulfillmentBoard {
    orders: watch::Sender<Arc<Vec<FulfillmentOrder>>>,
}

impl FulfillmentBoard {
    pub fn new() -> Self {
        let (orders, _) = watch::channel(Arc::new(Vec::new()));
        Self { orders }
    }

    /// Current snapshot of the queue
    pub fn orders(&self) -> Arc<Vec<FulfillmentOrder>> {
        self.orders.borrow().clone()
    }

    /// Reactive read path: receivers see each new snapshot as it lands
    pub fn subscribe(&self) -> watch::Receiver<Arc<Vec<FulfillmentOrder>>> {
        self.orders.subscribe()
    }

    /// Append a fulfillment entry for a published order. No de-duplication:
    /// publishing the same order id twice yields two entries.
    pub fn add_to_fulfillment(&self, order: &ParsedOrder) -> FulfillmentOrder {
        let entry = FulfillmentOrder::from_parsed(order);
        let added = entry.clone();
        self.orders.send_modify(|current| {
            let mut next = current.as_ref().clone();
            next.push(entry);
            *current = Arc::new(next);
        });
        info!(order_id = %added.id, "order added to fulfillment queue");
        added
    }

    /// Idempotently mark every entry with this order id fulfilled.
    /// Unknown ids are a no-op. Returns the number of entries touched.
    pub fn mark_as_fulfilled(&self, order_id: &str) -> usize {
        self.set_status(order_id, FulfillmentStatus::Fulfilled)
    }

    /// Idempotently put every entry with this order id back to pending
    pub fn mark_as_unfulfilled(&self, order_id: &str) -> usize {
        self.set_status(order_id, FulfillmentStatus::Pending)
    }

    fn set_status(&self, order_id: &str, status: FulfillmentStatus) -> usize {
        let mut touched = 0;
        self.orders.send_if_modified(|current| {
            if !current.iter().any(|o| o.id == order_id) {
                return false;
            }
            let mut next = current.as_ref().clone();
            for order in next.iter_mut().filter(|o| o.id == order_id) {
                order.status = status;
                touched += 1;
            }
            *current = Arc::new(next);
            true
        });
        if touched > 0 {
            info!(order_id, status = ?status, "fulfillment status updated");
        }
        touched
    }

    pub fn len(&self) -> usize {
        self.orders.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.borrow().is_empty()
    }

    pub fn pending_count(&self) -> usize {
        self.count_with(FulfillmentStatus::Pending)
    }

    pub fn fulfilled_count(&self) -> usize {
        self.count_with(FulfillmentStatus::Fulfilled)
    }

    /// Entries matching the filter; `None` returns everything
    pub fn filtered(&self, status: Option<FulfillmentStatus>) -> Vec<FulfillmentOrder> {
        self.orders
            .borrow()
            .iter()
            .filter(|o| status.map_or(true, |s| o.status == s))
            .cloned()
            .collect()
    }

    fn count_with(&self, status: FulfillmentStatus) -> usize {
        self.orders.borrow().iter().filter(|o| o.status == status).count()
    }
}

impl Default for FulfillmentBoard {
    fn default() -> Self {
        Self::new()
    }
}
