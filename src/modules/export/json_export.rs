//! JSON Export

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::domain::{Order, OrderId};
use crate::error::Result;

/// Flattened order as written to disk
#[derive(Serialize)]
struct ExportableOrder<'a> {
    id: &'a OrderId,
    user: &'a str,
    avatar: &'a str,
    project: &'a str,
    address: &'a str,
    date: &'a str,
    status: &'static str,
}

impl<'a> From<&'a Order> for ExportableOrder<'a> {
    fn from(order: &'a Order) -> Self {
        Self {
            id: &order.id,
            user: &order.user.name,
            avatar: &order.user.avatar,
            project: &order.project,
            address: &order.address,
            date: order.date.raw(),
            status: order.status.label(),
        }
    }
}

/// Write orders to JSON file
pub fn write_orders(path: &Path, orders: &[&Order]) -> Result<usize> {
    let exportable: Vec<ExportableOrder> = orders
        .iter()
        .map(|o| ExportableOrder::from(*o))
        .collect();

    let json = serde_json::to_string_pretty(&exportable)?;

    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;

    Ok(orders.len())
}
