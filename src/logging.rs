//! File logging. The terminal belongs to the TUI, so nothing goes to stdout.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directive for the given base level
pub fn filter_directive(level: Option<&str>) -> String {
    let level = level.map(str::trim).filter(|l| !l.is_empty()).unwrap_or("info");
    format!("byewind={level}")
}

/// Install the global subscriber writing to `log_file`. `RUST_LOG` wins over
/// `level` when set.
pub fn init(log_file: &Path, level: Option<&str>) -> std::io::Result<()> {
    if let Some(parent) = log_file.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(log_file)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(level)));

    // A second init (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Arc::new(file))
                .with_ansi(false),
        )
        .try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directive() {
        assert_eq!(filter_directive(None), "byewind=info");
        assert_eq!(filter_directive(Some("debug")), "byewind=debug");
        assert_eq!(filter_directive(Some("  ")), "byewind=info");
    }

    #[test]
    fn test_init_creates_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("byewind.log");
        init(&path, Some("debug")).unwrap();
        assert!(path.exists());
    }
}
