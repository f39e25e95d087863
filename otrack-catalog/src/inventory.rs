use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Stock level tracked per catalog product code
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryLevel {
    pub product_code: String,
    pub product_name: String,
    pub current: u32,
    pub threshold: u32,
}

/// Alert classification derived from current stock vs threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    Stockout,
    LowStock,
    Overstock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryAlert {
    pub product_code: String,
    pub product_name: String,
    pub kind: AlertKind,
    pub severity: Severity,
    pub current: u32,
    pub threshold: u32,
}

/// In-memory stock monitor; demand recorded from published orders draws
/// levels down and feeds the alert view
pub struct InventoryMonitor {
    levels: HashMap<String, InventoryLevel>,
}

impl InventoryMonitor {
    pub fn new() -> Self {
        Self {
            levels: HashMap::new(),
        }
    }

    /// Register a product with its starting stock and reorder threshold
    pub fn initialize(&mut self, product_code: &str, product_name: &str, current: u32, threshold: u32) {
        self.levels.insert(
            product_code.to_string(),
            InventoryLevel {
                product_code: product_code.to_string(),
                product_name: product_name.to_string(),
                current,
                threshold,
            },
        );
    }

    pub fn get(&self, product_code: &str) -> Option<&InventoryLevel> {
        self.levels.get(product_code)
    }

    /// Draw stock down for an order; saturates at zero
    pub fn record_demand(&mut self, product_code: &str, quantity: u32) -> Result<u32, InventoryError> {
        let level = self
            .levels
            .get_mut(product_code)
            .ok_or_else(|| InventoryError::NotFound(product_code.to_string()))?;

        level.current = level.current.saturating_sub(quantity);
        Ok(level.current)
    }

    /// Current alerts, highest severity first
    pub fn alerts(&self) -> Vec<InventoryAlert> {
        let mut alerts: Vec<InventoryAlert> = self
            .levels
            .values()
            .filter_map(|level| {
                let (kind, severity) = classify(level)?;
                Some(InventoryAlert {
                    product_code: level.product_code.clone(),
                    product_name: level.product_name.clone(),
                    kind,
                    severity,
                    current: level.current,
                    threshold: level.threshold,
                })
            })
            .collect();

        alerts.sort_by(|a, b| b.severity.cmp(&a.severity).then(a.product_code.cmp(&b.product_code)));
        alerts
    }
}

/// Stockout when stock is at or below 20% of the threshold, low-stock
/// below the threshold, overstock above twice the threshold
fn classify(level: &InventoryLevel) -> Option<(AlertKind, Severity)> {
    if level.current * 5 <= level.threshold {
        Some((AlertKind::Stockout, Severity::High))
    } else if level.current < level.threshold {
        Some((AlertKind::LowStock, Severity::Medium))
    } else if level.current > level.threshold * 2 {
        Some((AlertKind::Overstock, Severity::Low))
    } else {
        None
    }
}

impl Default for InventoryMonitor {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("Inventory not tracked for product: {0}")]
    NotFound(String),
}
