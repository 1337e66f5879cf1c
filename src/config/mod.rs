use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::core::{NavState, Theme, ViewId};
use crate::error::{DashboardError, Result};

pub const DEFAULT_TICK_RATE_MS: u64 = 200;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub theme: Theme,
    pub start_view: Option<String>,
    pub sidebar_open: bool,
    pub tick_rate_ms: u64,
    pub export_dir: Option<PathBuf>,
    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            start_view: None,
            sidebar_open: false,
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            export_dir: None,
            log_level: None,
        }
    }
}

impl Config {
    pub fn start_view(&self) -> ViewId {
        self.start_view
            .as_deref()
            .map(ViewId::parse)
            .unwrap_or_default()
    }

    pub fn initial_nav(&self) -> NavState {
        NavState {
            view: self.start_view(),
            sidebar_open: self.sidebar_open,
            drawer_open: false,
            theme: self.theme,
        }
    }

    /// Zero would spin the event loop
    pub fn tick_rate_ms(&self) -> u64 {
        self.tick_rate_ms.max(1)
    }
}

/// Defaults for a missing file; a broken file is an error
pub fn try_load(explicit: Option<&Path>) -> Result<Config> {
    let Some(path) = explicit.map(Path::to_path_buf).or_else(config_path) else {
        return Ok(Config::default());
    };
    let config = read(&path)?;
    if config.is_some() {
        debug!(path = %path.display(), "loaded config");
    }
    Ok(config.unwrap_or_default())
}

/// Fall back to defaults, warning about a broken file. Call after the
/// subscriber is installed or the warning is lost.
pub fn or_default(loaded: Result<Config>) -> Config {
    loaded.unwrap_or_else(|err| {
        warn!(error = %err, "using default config");
        Config::default()
    })
}

/// `Ok(None)` when the file does not exist
pub fn read(path: &Path) -> Result<Option<Config>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(DashboardError::ConfigRead {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    toml::from_str::<Config>(&content)
        .map(Some)
        .map_err(|source| DashboardError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("BYEWIND_CONFIG").map(PathBuf::from) {
        return Some(path);
    }
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        return Some(xdg.join("byewind").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".config").join("byewind").join("config.toml"));
    }

    directories::ProjectDirs::from("io", "byewind", "byewind")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

pub fn data_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME").map(PathBuf::from) {
        return Some(xdg.join("byewind"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".local").join("share").join("byewind"));
    }
    directories::ProjectDirs::from("io", "byewind", "byewind")
        .map(|dirs| dirs.data_dir().to_path_buf())
}

pub fn log_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("byewind.log"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config: Config = toml::from_str(
            r#"
            theme = "dark"
            start_view = "ecommerce"
            sidebar_open = true
            tick_rate_ms = 100
            export_dir = "/tmp/exports"
            log_level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.theme, Theme::Dark);
        assert_eq!(config.start_view(), ViewId::Ecommerce);
        assert_eq!(config.tick_rate_ms(), 100);
        assert_eq!(config.export_dir, Some(PathBuf::from("/tmp/exports")));

        let nav = config.initial_nav();
        assert!(nav.sidebar_open);
        assert!(!nav.drawer_open);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str("theme = \"light\"").unwrap();
        assert_eq!(config.tick_rate_ms, DEFAULT_TICK_RATE_MS);
        assert_eq!(config.start_view(), ViewId::OrderList);
        assert!(config.export_dir.is_none());
    }

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read(&dir.path().join("nope.toml")).unwrap().is_none());
        assert_eq!(try_load(Some(&dir.path().join("nope.toml"))).unwrap(), Config::default());
    }

    #[test]
    fn test_invalid_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "theme = \"purple\"").unwrap();
        assert!(matches!(
            read(&path),
            Err(DashboardError::ConfigParse { .. })
        ));
        assert!(try_load(Some(&path)).is_err());
        assert_eq!(or_default(try_load(Some(&path))), Config::default());
    }
}
