//! CSV Export
//!
//! Writes order rows to CSV files.

use std::path::Path;

use crate::domain::Order;
use crate::error::Result;

/// Write orders to CSV file
pub fn write_orders(path: &Path, orders: &[&Order]) -> Result<usize> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["id", "user", "project", "address", "date", "status"])?;

    for order in orders {
        wtr.write_record([
            order.id.as_str(),
            order.user.name.as_str(),
            order.project.as_str(),
            order.address.as_str(),
            order.date.raw(),
            order.status.label(),
        ])?;
    }

    wtr.flush()?;
    Ok(orders.len())
}
