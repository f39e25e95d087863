pub mod board;
pub mod models;
pub mod publisher;

pub use board::FulfillmentBoard;
pub use models::{FulfillmentOrder, FulfillmentStatus};
pub use publisher::{ErpPublisher, PublishError};
