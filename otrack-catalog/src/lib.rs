pub mod inventory;
pub mod reference;

pub use inventory::{AlertKind, InventoryAlert, InventoryLevel, InventoryMonitor, Severity};
pub use reference::{ProductRef, CITIES, COMPANIES, PRODUCTS, STREETS};
