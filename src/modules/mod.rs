//! View modules
//!
//! Each view implements the Module trait and handles its own keys:
//! - orders: Order List table (cursor, checkboxes, sort chord, paging)
//! - ecommerce: analytics panels
//! - export: CSV/JSON export of orders

pub mod ecommerce;
pub mod export;
pub mod orders;
