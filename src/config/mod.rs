//! Configuration loading for the reservation desk.
//!
//! Two sources: environment variables (database location, via `.env` or the
//! ambient environment) and `config.toml` (the suite/dining catalog and the
//! simulated submission delay).

/// Suite and dining-slot catalog loaded from config.toml
pub mod catalog;
/// Database connection and table creation
pub mod database;

use crate::errors::{Error, Result};
use catalog::Catalog;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Default simulated submission latency in milliseconds. Stands in for a
/// real backend round trip; replace the delay with the actual call when one
/// exists.
const DEFAULT_SUBMIT_DELAY_MS: u64 = 1500;

fn default_submit_delay_ms() -> u64 {
    DEFAULT_SUBMIT_DELAY_MS
}

/// The parsed contents of config.toml.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Simulated submission latency in milliseconds
    #[serde(default = "default_submit_delay_ms")]
    pub submit_delay_ms: u64,
    /// Selection catalog for both reservation kinds
    #[serde(flatten)]
    pub catalog: Catalog,
}

impl AppConfig {
    /// The submission delay as a [`Duration`].
    #[must_use]
    pub const fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }
}

/// Loads application configuration from a TOML file.
///
/// # Errors
/// Returns [`Error::Config`] if the file cannot be read or the TOML is
/// invalid or missing required fields.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    tracing::debug!("Loading configuration from {:?}", path_ref);

    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {path_ref:?}: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse {path_ref:?}: {e}"),
    })
}

/// Loads configuration from the default location (./config.toml).
pub fn load_default_config() -> Result<AppConfig> {
    load_config("config.toml")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_app_config() {
        let toml_str = r#"
            submit_delay_ms = 250

            [[suites]]
            name = "Spa Sanctuary"
            nightly_rate = 600
            max_guests = 2

            [dining]
            slots = ["19:00"]
        "#;

        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.submit_delay(), Duration::from_millis(250));
        assert_eq!(config.catalog.suites.len(), 1);
        assert_eq!(config.catalog.dining.slots, vec!["19:00"]);
    }

    #[test]
    fn test_submit_delay_defaults_when_absent() {
        let toml_str = r#"
            [[suites]]
            name = "Skyline Bath"
            nightly_rate = 550
            max_guests = 2

            [dining]
            slots = ["18:00", "19:00"]
        "#;

        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.submit_delay_ms, 1500);
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let result = load_config("definitely/not/here.toml");
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));
    }
}
