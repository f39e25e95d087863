use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use otrack_shared::models::OrderDocument;
use otrack_shared::ParsedOrder;

/// Fulfillment state of a published order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FulfillmentStatus {
    Pending,
    Fulfilled,
}

/// A published order sitting in the fulfillment queue. Entries are never
/// deleted; the status toggle is the only mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FulfillmentOrder {
    /// Distinguishes entries when the same order id is published twice
    pub entry_id: Uuid,
    pub id: String,
    pub customer_name: String,
    pub product_name: String,
    pub product_code: String,
    pub quantity: u32,
    pub price: f64,
    pub published_date: DateTime<Utc>,
    pub status: FulfillmentStatus,
    pub document: OrderDocument,
}

impl FulfillmentOrder {
    pub fn from_parsed(order: &ParsedOrder) -> Self {
        Self {
            entry_id: Uuid::new_v4(),
            id: order.id.clone(),
            customer_name: order.customer_name.clone(),
            product_name: order.product_name.clone(),
            product_code: order.product_code.clone(),
            quantity: order.quantity,
            price: order.price,
            published_date: Utc::now(),
            status: FulfillmentStatus::Pending,
            document: order.document.clone(),
        }
    }
}
