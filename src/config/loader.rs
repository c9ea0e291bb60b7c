//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configuration from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::error::{EngineError, EngineResult};

use super::types::{EngineConfig, OutreachConfig, SavingsConfig, ServiceConfig};

/// Loads and provides access to engine configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// provides methods to query the upstream service settings and the
/// outreach limits.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/default/
/// ├── service.yaml   # Service metadata and upstream API settings
/// └── outreach.yaml  # Match cap, generation limit, savings figures
/// ```
///
/// # Example
///
/// ```no_run
/// use tjm_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Upstream API: {}", loader.base_url());
/// println!("Generation limit: {}", loader.max_generations());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/default")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any required field is missing from the configuration
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let service_path = path.join("service.yaml");
        let service = Self::load_yaml::<ServiceConfig>(&service_path)?;

        let outreach_path = path.join("outreach.yaml");
        let outreach = Self::load_yaml::<OutreachConfig>(&outreach_path)?;

        Ok(Self {
            config: EngineConfig::new(service, outreach),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the service configuration.
    pub fn service(&self) -> &ServiceConfig {
        self.config.service()
    }

    /// The base URL of the upstream matching / mail-generation API.
    pub fn base_url(&self) -> &str {
        &self.config.service().base_url
    }

    /// The timeout applied to upstream requests.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.config.service().timeout_secs)
    }

    /// Maximum number of matches returned to a session.
    pub fn max_matches(&self) -> usize {
        self.config.outreach().max_matches
    }

    /// Maximum mail generations per thread.
    pub fn max_generations(&self) -> u32 {
        self.config.outreach().max_generations
    }

    /// Minimum length of a mission statement.
    pub fn min_statement_len(&self) -> usize {
        self.config.outreach().min_statement_len
    }

    /// Savings credited per sent mail: (minutes, euros).
    pub fn savings_per_mail(&self) -> (u32, Decimal) {
        let savings: &SavingsConfig = &self.config.outreach().savings;
        (savings.minutes_per_mail, savings.value_per_mail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/default"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.service().name, "tjm-engine");
        assert_eq!(loader.service().version, "2026-08-01");
    }

    #[test]
    fn test_base_url_loaded() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.base_url(), "https://leadgen-api.example.com");
    }

    #[test]
    fn test_timeout_loaded() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_outreach_limits_loaded() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.max_matches(), 10);
        assert_eq!(loader.max_generations(), 3);
        assert_eq!(loader.min_statement_len(), 10);
    }

    #[test]
    fn test_savings_per_mail_loaded() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let (minutes, value) = loader.savings_per_mail();
        assert_eq!(minutes, 5);
        assert_eq!(value, dec("20.00"));
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");
        assert!(result.is_err());

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("service.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }
}
