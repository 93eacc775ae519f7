//! Report configuration.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. A `.env` file in the working directory is read first, if present.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// How the report is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    /// Best-seller line plus a text chart.
    #[default]
    Text,
    /// One JSON document.
    Json,
}

impl FromStr for ReportFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(ConfigError::InvalidValue("ECOM_REPORT_FORMAT".to_string())),
        }
    }
}

/// Sales report configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// SQLite database file (created if missing)
    pub database_path: PathBuf,

    /// Insert the sample data before reporting
    pub seed: bool,

    /// Output format
    pub format: ReportFormat,

    /// Width of a 100% bar in the text chart, in characters
    pub chart_width: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            database_path: PathBuf::from("./ecommerce.db"),
            seed: true,
            format: ReportFormat::Text,
            chart_width: 40,
        }
    }
}

impl ReportConfig {
    /// Load configuration from the process environment (and `.env`).
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ReportConfig::default();

        let config = ReportConfig {
            database_path: lookup("ECOM_DB_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.database_path),

            seed: match lookup("ECOM_SEED") {
                Some(value) => parse_bool("ECOM_SEED", &value)?,
                None => defaults.seed,
            },

            format: match lookup("ECOM_REPORT_FORMAT") {
                Some(value) => value.parse()?,
                None => defaults.format,
            },

            chart_width: match lookup("ECOM_CHART_WIDTH") {
                Some(value) => value
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("ECOM_CHART_WIDTH".to_string()))?,
                None => defaults.chart_width,
            },
        };

        if config.database_path.as_os_str().is_empty() {
            return Err(ConfigError::MissingRequired("ECOM_DB_PATH".to_string()));
        }

        if config.chart_width == 0 {
            return Err(ConfigError::InvalidValue("ECOM_CHART_WIDTH".to_string()));
        }

        Ok(config)
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue(key.to_string())),
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<ReportConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ReportConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.database_path, PathBuf::from("./ecommerce.db"));
        assert!(config.seed);
        assert_eq!(config.format, ReportFormat::Text);
        assert_eq!(config.chart_width, 40);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("ECOM_DB_PATH", "/tmp/shop.db"),
            ("ECOM_SEED", "off"),
            ("ECOM_REPORT_FORMAT", "JSON"),
            ("ECOM_CHART_WIDTH", "20"),
        ])
        .unwrap();

        assert_eq!(config.database_path, PathBuf::from("/tmp/shop.db"));
        assert!(!config.seed);
        assert_eq!(config.format, ReportFormat::Json);
        assert_eq!(config.chart_width, 20);
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            load(&[("ECOM_SEED", "maybe")]),
            Err(ConfigError::InvalidValue(key)) if key == "ECOM_SEED"
        ));
        assert!(load(&[("ECOM_REPORT_FORMAT", "pie")]).is_err());
        assert!(load(&[("ECOM_CHART_WIDTH", "0")]).is_err());
        assert!(load(&[("ECOM_CHART_WIDTH", "wide")]).is_err());
        assert!(matches!(
            load(&[("ECOM_DB_PATH", "")]),
            Err(ConfigError::MissingRequired(_))
        ));
    }
}
