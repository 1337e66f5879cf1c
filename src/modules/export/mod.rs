//! Export Module
//!
//! - 'e' writes CSV, 'E' writes JSON
//! - Exports the selection, or every order matching the query when nothing
//!   is selected
//! - Files saved to the configured export dir or the data dir's exports/

mod csv_export;
mod json_export;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::{info, warn};

use crate::core::{Action, DashboardState, ExportFormat, NotifyLevel};
use crate::domain::Order;
use crate::error::{DashboardError, Result};
use crate::store::OrderStore;

/// Resolve the export directory, creating it if needed
pub fn export_dir(configured: Option<&Path>) -> std::io::Result<PathBuf> {
    let export_dir = match configured {
        Some(dir) => dir.to_path_buf(),
        None => crate::config::data_dir()
            .map(|dir| dir.join("exports"))
            .unwrap_or_else(|| PathBuf::from(".byewind").join("exports")),
    };
    fs::create_dir_all(&export_dir)?;
    Ok(export_dir)
}

/// Generate a timestamped filename
pub fn generate_filename(prefix: &str, extension: &str) -> String {
    let timestamp = Local::now().format("%Y-%m-%d-%H%M%S");
    format!("{}-{}.{}", prefix, timestamp, extension)
}

/// Rows an export writes: selected orders in store order, otherwise the
/// current query's matches in display order
pub fn export_set<'a>(store: &'a OrderStore, state: &DashboardState) -> Vec<&'a Order> {
    if state.selection.is_empty() {
        state.view(store).matches
    } else {
        store.pick(state.selection.ids()).collect()
    }
}

/// Write `orders` into `dir`, returning the file path and row count
pub fn write_export(
    dir: &Path,
    orders: &[&Order],
    format: ExportFormat,
) -> Result<(PathBuf, usize)> {
    if orders.is_empty() {
        return Err(DashboardError::EmptyExport);
    }
    let path = dir.join(generate_filename("orders", format.extension()));
    let count = match format {
        ExportFormat::Csv => csv_export::write_orders(&path, orders)?,
        ExportFormat::Json => json_export::write_orders(&path, orders)?,
    };
    Ok((path, count))
}

/// Export for the current state, reported as a status notification
pub fn export_orders(
    store: &OrderStore,
    state: &DashboardState,
    format: ExportFormat,
    configured_dir: Option<&Path>,
) -> Action {
    let orders = export_set(store, state);
    if orders.is_empty() {
        return Action::Notify("No orders to export".to_string(), NotifyLevel::Warn);
    }

    let export_dir = match export_dir(configured_dir) {
        Ok(dir) => dir,
        Err(e) => {
            warn!(error = %e, "export directory unavailable");
            return Action::Notify(
                format!("Failed to create export directory: {}", e),
                NotifyLevel::Error,
            );
        }
    };

    match write_export(&export_dir, &orders, format) {
        Ok((path, count)) => {
            info!(path = %path.display(), count, "exported orders");
            Action::Notify(
                format!("Exported {} orders to {}", count, path.display()),
                NotifyLevel::Info,
            )
        }
        Err(e) => {
            warn!(error = %e, "export failed");
            Action::Notify(format!("Export failed: {}", e), NotifyLevel::Error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::OrderId;

    #[test]
    fn test_generate_filename() {
        let name = generate_filename("orders", "csv");
        assert!(name.starts_with("orders-"));
        assert!(name.ends_with(".csv"));
        // orders-YYYY-MM-DD-HHMMSS.csv
        assert_eq!(name.len(), "orders-".len() + 17 + ".csv".len());
    }

    #[test]
    fn test_export_set_prefers_selection() {
        let store = OrderStore::sample().unwrap();
        let state = DashboardState::default();
        assert_eq!(export_set(&store, &state).len(), 15);

        let state = state.reduce(&Action::ToggleOrder(OrderId::from("#CM9812")), &store);
        let state = state.reduce(&Action::ToggleOrder(OrderId::from("#CM9802")), &store);
        let ids: Vec<&str> = export_set(&store, &state)
            .iter()
            .map(|o| o.id.as_str())
            .collect();
        assert_eq!(ids, ["#CM9802", "#CM9812"]);
    }

    #[test]
    fn test_export_set_outlives_state() {
        let store = OrderStore::sample().unwrap();
        let rows = {
            let state = DashboardState::default()
                .reduce(&Action::ToggleOrder(OrderId::from("#CM9807")), &store);
            export_set(&store, &state)
        };
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].user.name, "Michael Chen");
    }

    #[test]
    fn test_export_orders_writes_into_configured_dir() {
        let dir = tempfile::tempdir().unwrap();
        let store = OrderStore::sample().unwrap();
        let state = DashboardState::default().reduce(&Action::SetSearch("lane".into()), &store);

        let action = export_orders(&store, &state, ExportFormat::Json, Some(dir.path()));
        assert!(matches!(
            action,
            Action::Notify(ref msg, NotifyLevel::Info) if msg.starts_with("Exported 1 orders")
        ));

        let files: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_empty_export_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = write_export(dir.path(), &[], ExportFormat::Csv).unwrap_err();
        assert!(matches!(err, DashboardError::EmptyExport));

        let store = OrderStore::sample().unwrap();
        let state = DashboardState::default().reduce(&Action::SetSearch("zzz".into()), &store);
        let action = export_orders(&store, &state, ExportFormat::Csv, Some(dir.path()));
        assert!(matches!(action, Action::Notify(_, NotifyLevel::Warn)));
    }
}
