//! Startup order: a broken config file is reported through the log file

use std::fs;

use byewind::config::{self, Config};
use byewind::logging;

#[test]
fn test_invalid_config_warning_reaches_log() {
    let dir = tempfile::tempdir().unwrap();
    let config_file = dir.path().join("config.toml");
    let log_file = dir.path().join("logs").join("byewind.log");
    fs::write(&config_file, "theme = \"purple\"").unwrap();

    // Same sequence as the binary: read, install the subscriber, then report
    let loaded = config::try_load(Some(&config_file));
    assert!(loaded.is_err());
    logging::init(&log_file, Some("info")).unwrap();
    let config = config::or_default(loaded);

    assert_eq!(config, Config::default());
    let log = fs::read_to_string(&log_file).unwrap();
    assert!(log.contains("WARN"), "{log}");
    assert!(log.contains("using default config"), "{log}");
}
