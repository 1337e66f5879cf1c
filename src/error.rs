use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("duplicate order id {0}")]
    DuplicateOrderId(String),

    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("nothing to export")]
    EmptyExport,

    #[error("export io: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DashboardError>;
