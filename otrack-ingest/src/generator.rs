use async_trait::async_trait;
use chrono::{Duration, Utc};
use rand::Rng;

use otrack_catalog::reference::{CITIES, COMPANIES, PRODUCTS, STREETS};
use otrack_shared::models::{
    round2, CustomerInfo, DeliveryInfo, ExtractionMetadata, LineItem, OrderDocument, ParsedOrder,
};
use otrack_shared::Channel;

/// Where parsed orders come from. The mock generator implements this so a
/// real ingestion backend can replace it without touching callers.
#[async_trait]
pub trait OrderSource: Send + Sync {
    async fn fetch_orders(&self, count: usize) -> Result<Vec<ParsedOrder>, SourceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Channel backend unavailable: {0}")]
    Unavailable(String),

    #[error("Scan cancelled before completion")]
    Cancelled,
}

/// Produces synthetic orders with internally consistent derived fields.
/// Values are randomized per call and deliberately unseeded.
#[derive(Debug, Clone, Default)]
pub struct MockOrderGenerator;

impl MockOrderGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate exactly `count` orders with sequential ORD-### ids
    pub fn generate(&self, count: usize) -> Vec<ParsedOrder> {
        (0..count).map(|index| self.generate_order(index)).collect()
    }

    fn generate_order(&self, index: usize) -> ParsedOrder {
        let mut rng = rand::thread_rng();

        let company = COMPANIES[rng.gen_range(0..COMPANIES.len())];
        let product = &PRODUCTS[rng.gen_range(0..PRODUCTS.len())];
        let source = Channel::ALL[rng.gen_range(0..Channel::ALL.len())];
        let city = CITIES[rng.gen_range(0..CITIES.len())];
        let street = STREETS[rng.gen_range(0..STREETS.len())];

        let quantity: u32 = rng.gen_range(10..510);
        // ±20% price variation around the catalog base price
        let multiplier: f64 = rng.gen_range(0.8..1.2);
        let price = round2(product.base_price * multiplier);
        let confidence = round2(rng.gen_range(0.85..0.99));

        let id = format!("ORD-{:03}", index + 1);
        let product_code = format!("{}-{}", product.code, rng.gen_range(1000..10000));
        let street_number: u32 = rng.gen_range(1..10000);
        let zip: u32 = rng.gen_range(10000..100000);
        let delivery_address = format!("{} {}, {} {}", street_number, street, city, zip);

        let contact = contact_for(source, company, &mut rng);
        let requested_date = (Utc::now() + Duration::days(rng.gen_range(0..=30))).date_naive();

        let document = OrderDocument {
            order_id: id.clone(),
            customer: CustomerInfo {
                name: company.to_string(),
                contact,
            },
            items: vec![LineItem {
                product_code: product_code.clone(),
                product_name: product.name.to_string(),
                quantity,
                unit_price: price,
                total_price: round2(quantity as f64 * price),
            }],
            delivery: DeliveryInfo {
                address: delivery_address.clone(),
                requested_date,
            },
            metadata: ExtractionMetadata {
                source: source.slug().to_string(),
                confidence,
                extracted_at: Utc::now(),
            },
        };

        ParsedOrder {
            id,
            customer_name: company.to_string(),
            product_name: product.name.to_string(),
            product_code,
            quantity,
            price,
            delivery_address,
            source,
            confidence,
            published: false,
            document,
        }
    }
}

#[async_trait]
impl OrderSource for MockOrderGenerator {
    async fn fetch_orders(&self, count: usize) -> Result<Vec<ParsedOrder>, SourceError> {
        Ok(self.generate(count))
    }
}

/// Contact string derived from the intake channel
fn contact_for<R: Rng>(source: Channel, company: &str, rng: &mut R) -> String {
    let slug = company_slug(company);
    match source {
        Channel::Email => format!("orders@{}.com", slug),
        Channel::WhatsApp => format!("+1-555-{:04}", rng.gen_range(0..10000u32)),
        Channel::PhoneCall => format!("procurement@{}.com", slug),
        Channel::WebForm => format!("webform@{}.com", slug),
    }
}

fn company_slug(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase()
}
