use std::time::Duration;

use tokio::time::sleep;
use tracing::info;

use crate::board::FulfillmentBoard;
use crate::models::FulfillmentOrder;
use otrack_shared::ParsedOrder;

/// Simulated ERP boundary: publishing is a fixed latency followed by an
/// insert into the fulfillment queue. Dropping the future before the
/// delay elapses leaves the queue untouched.
pub struct ErpPublisher {
    delay: Duration,
}

impl ErpPublisher {
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Publish a parsed order. Marks it published and queues it for
    /// fulfillment; an already-published order is rejected.
    pub async fn publish(
        &self,
        order: &mut ParsedOrder,
        board: &FulfillmentBoard,
    ) -> Result<FulfillmentOrder, PublishError> {
        if order.published {
            return Err(PublishError::AlreadyPublished(order.id.clone()));
        }

        sleep(self.delay).await;

        order.published = true;
        let entry = board.add_to_fulfillment(order);
        info!(order_id = %order.id, "order published to ERP");
        Ok(entry)
    }
}

impl Default for ErpPublisher {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("Order already published: {0}")]
    AlreadyPublished(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FulfillmentStatus;
    use chrono::{NaiveDate, Utc};
    use otrack_shared::models::{
        CustomerInfo, DeliveryInfo, ExtractionMetadata, LineItem, OrderDocument,
    };
    use otrack_shared::Channel;
    use std::sync::Arc;

    fn parsed_order(id: &str) -> ParsedOrder {
        let document = OrderDocument {
            order_id: id.to_string(),
            customer: CustomerInfo {
                name: "TechFlow Solutions".to_string(),
                contact: "+1-555-0123".to_string(),
            },
            items: vec![LineItem {
                product_code: "PC-5500".to_string(),
                product_name: "Premium Connectors".to_string(),
                quantity: 75,
                unit_price: 45.0,
                total_price: 3375.0,
            }],
            delivery: DeliveryInfo {
                address: "456 Innovation Blvd, Tech Valley, NY 12180".to_string(),
                requested_date: NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
            },
            metadata: ExtractionMetadata {
                source: "whatsapp".to_string(),
                confidence: 0.89,
                extracted_at: Utc::now(),
            },
        };

        ParsedOrder {
            id: id.to_string(),
            customer_name: "TechFlow Solutions".to_string(),
            product_name: "Premium Connectors".to_string(),
            product_code: "PC-5500".to_string(),
            quantity: 75,
            price: 45.0,
            delivery_address: "456 Innovation Blvd, Tech Valley, NY 12180".to_string(),
            source: Channel::WhatsApp,
            confidence: 0.89,
            published: false,
            document,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_publish_inserts_after_delay() {
        let board = FulfillmentBoard::new();
        let publisher = ErpPublisher::new(Duration::from_millis(1000));
        let mut order = parsed_order("ORD-002");

        let entry = publisher.publish(&mut order, &board).await.unwrap();

        assert!(order.published);
        assert_eq!(entry.status, FulfillmentStatus::Pending);
        assert_eq!(entry.id, "ORD-002");
        assert_eq!(board.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_double_publish_rejected() {
        let board = FulfillmentBoard::new();
        let publisher = ErpPublisher::new(Duration::from_millis(10));
        let mut order = parsed_order("ORD-002");

        publisher.publish(&mut order, &board).await.unwrap();
        let second = publisher.publish(&mut order, &board).await;

        assert!(matches!(second, Err(PublishError::AlreadyPublished(_))));
        assert_eq!(board.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_publish_leaves_board_untouched() {
        let board = Arc::new(FulfillmentBoard::new());
        let board_clone = Arc::clone(&board);

        let task = tokio::spawn(async move {
            let publisher = ErpPublisher::new(Duration::from_secs(60));
            let mut order = parsed_order("ORD-003");
            publisher.publish(&mut order, &board_clone).await
        });

        // let the task reach its sleep, then tear it down
        tokio::time::sleep(Duration::from_millis(5)).await;
        task.abort();
        let _ = task.await;

        tokio::time::sleep(Duration::from_secs(120)).await;
        assert!(board.is_empty());
    }
}
