use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::channel::Channel;

/// Round to 2 decimal places, the precision used for all money fields
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// A synthetic order extracted from a channel message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParsedOrder {
    pub id: String,
    pub customer_name: String,
    pub product_name: String,
    pub product_code: String,
    pub quantity: u32,
    pub price: f64,
    pub delivery_address: String,
    pub source: Channel,
    pub confidence: f64,
    pub published: bool,
    /// Structured extraction artifact shown to the user
    pub document: OrderDocument,
}

impl ParsedOrder {
    /// Line total for the single line item
    pub fn total_price(&self) -> f64 {
        round2(self.quantity as f64 * self.price)
    }

    /// Apply an edit and recompute the document mirror so it stays
    /// consistent with the flat fields
    pub fn apply_edit(&mut self, edit: OrderEdit) {
        if let Some(customer_name) = edit.customer_name {
            self.customer_name = customer_name;
        }
        if let Some(product_name) = edit.product_name {
            self.product_name = product_name;
        }
        if let Some(product_code) = edit.product_code {
            self.product_code = product_code;
        }
        if let Some(quantity) = edit.quantity {
            self.quantity = quantity;
        }
        if let Some(price) = edit.price {
            self.price = round2(price);
        }
        if let Some(delivery_address) = edit.delivery_address {
            self.delivery_address = delivery_address;
        }
        self.sync_document();
    }

    /// Rebuild the parts of the document derived from flat fields.
    /// Contact, requested date and extraction metadata are not editable
    /// and are left as extracted.
    fn sync_document(&mut self) {
        self.document.order_id = self.id.clone();
        self.document.customer.name = self.customer_name.clone();
        self.document.delivery.address = self.delivery_address.clone();

        let line = LineItem {
            product_code: self.product_code.clone(),
            product_name: self.product_name.clone(),
            quantity: self.quantity,
            unit_price: self.price,
            total_price: self.total_price(),
        };
        if self.document.items.is_empty() {
            self.document.items.push(line);
        } else {
            self.document.items[0] = line;
        }
    }
}

/// Nested extraction document, serialized with the field names the
/// downstream ERP integration expects
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderDocument {
    pub order_id: String,
    pub customer: CustomerInfo,
    pub items: Vec<LineItem>,
    pub delivery: DeliveryInfo,
    pub metadata: ExtractionMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerInfo {
    pub name: String,
    pub contact: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub product_code: String,
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub total_price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryInfo {
    pub address: String,
    pub requested_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionMetadata {
    pub source: String,
    pub confidence: f64,
    pub extracted_at: DateTime<Utc>,
}

/// Editable fields of a parsed order, applied atomically
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderEdit {
    pub customer_name: Option<String>,
    pub product_name: Option<String>,
    pub product_code: Option<String>,
    pub quantity: Option<u32>,
    pub price: Option<f64>,
    pub delivery_address: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_order() -> ParsedOrder {
        let document = OrderDocument {
            order_id: "ORD-001".to_string(),
            customer: CustomerInfo {
                name: "Acme Corp".to_string(),
                contact: "orders@acmecorp.com".to_string(),
            },
            items: vec![LineItem {
                product_code: "IW-2024".to_string(),
                product_name: "Industrial Widgets".to_string(),
                quantity: 150,
                unit_price: 29.99,
                total_price: 4498.5,
            }],
            delivery: DeliveryInfo {
                address: "123 Business St, Commerce City, CA 90210".to_string(),
                requested_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            },
            metadata: ExtractionMetadata {
                source: "email".to_string(),
                confidence: 0.96,
                extracted_at: Utc::now(),
            },
        };

        ParsedOrder {
            id: "ORD-001".to_string(),
            customer_name: "Acme Corp".to_string(),
            product_name: "Industrial Widgets".to_string(),
            product_code: "IW-2024".to_string(),
            quantity: 150,
            price: 29.99,
            delivery_address: "123 Business St, Commerce City, CA 90210".to_string(),
            source: Channel::Email,
            confidence: 0.96,
            published: false,
            document,
        }
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(4498.499999), 4498.5);
        assert_eq!(round2(0.005), 0.01);
        assert_eq!(round2(100.0), 100.0);
    }

    #[test]
    fn test_total_price_matches_document() {
        let order = sample_order();
        assert_eq!(order.document.items[0].total_price, order.total_price());
    }

    #[test]
    fn test_edit_recomputes_line_total() {
        let mut order = sample_order();
        order.apply_edit(OrderEdit {
            quantity: Some(200),
            price: Some(31.5),
            ..Default::default()
        });

        assert_eq!(order.quantity, 200);
        assert_eq!(order.price, 31.5);
        assert_eq!(order.document.items[0].quantity, 200);
        assert_eq!(order.document.items[0].unit_price, 31.5);
        assert_eq!(order.document.items[0].total_price, round2(200.0 * 31.5));
    }

    #[test]
    fn test_edit_keeps_untouched_fields() {
        let mut order = sample_order();
        let contact = order.document.customer.contact.clone();
        order.apply_edit(OrderEdit {
            customer_name: Some("TechFlow Solutions".to_string()),
            delivery_address: Some("456 Innovation Blvd, Tech Valley, NY 12180".to_string()),
            ..Default::default()
        });

        assert_eq!(order.document.customer.name, "TechFlow Solutions");
        assert_eq!(order.document.customer.contact, contact);
        assert_eq!(
            order.document.delivery.address,
            "456 Innovation Blvd, Tech Valley, NY 12180"
        );
        // untouched line item fields survive
        assert_eq!(order.document.items[0].product_code, "IW-2024");
    }

    #[test]
    fn test_document_serializes_camel_case() {
        let order = sample_order();
        let value = serde_json::to_value(&order.document).unwrap();

        assert_eq!(value["orderId"], "ORD-001");
        assert_eq!(value["items"][0]["productCode"], "IW-2024");
        assert_eq!(value["items"][0]["unitPrice"], 29.99);
        assert_eq!(value["items"][0]["totalPrice"], 4498.5);
        assert_eq!(value["delivery"]["requestedDate"], "2024-01-15");
        assert_eq!(value["metadata"]["source"], "email");
    }
}
