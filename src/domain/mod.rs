pub mod analytics;
pub mod date;
pub mod feed;
pub mod order;

pub use date::{DateValue, OrderDate};
pub use order::{Order, OrderId, OrderStatus, UserRef};
