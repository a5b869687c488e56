//! App Configuration
//!
//! Settings fixed at startup. There is no environment in the browser, so
//! values come from defaults and the builder methods in `main`.

use crud_store::DEFAULT_STORAGE_KEY;
use log::{Level, LevelFilter};

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// `localStorage` key holding the record snapshot
    pub storage_key: String,
    /// Console log threshold
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            log_level: if cfg!(debug_assertions) {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
        }
    }
}

impl AppConfig {
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn with_log_level(mut self, level: LevelFilter) -> Self {
        self.log_level = level;
        self
    }

    /// Level for the console logger; `None` when logging is off
    pub fn console_level(&self) -> Option<Level> {
        self.log_level.to_level()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_use_shared_key() {
        let config = AppConfig::default();
        assert_eq!(config.storage_key, "data");
    }

    #[test]
    fn test_builder_overrides() {
        let config = AppConfig::default()
            .with_storage_key("records-v1")
            .with_log_level(LevelFilter::Warn);
        assert_eq!(config.storage_key, "records-v1");
        assert_eq!(config.log_level, LevelFilter::Warn);
    }

    #[test]
    fn test_console_level() {
        let config = AppConfig::default().with_log_level(LevelFilter::Info);
        assert_eq!(config.console_level(), Some(Level::Info));

        let silent = config.with_log_level(LevelFilter::Off);
        assert_eq!(silent.console_level(), None);
    }
}
