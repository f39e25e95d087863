pub mod channel;
pub mod models;

pub use channel::Channel;
pub use models::{OrderDocument, OrderEdit, ParsedOrder};
