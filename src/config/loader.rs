//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::PayrollConfig;

/// Loads and provides access to payroll configuration.
///
/// The configuration file is a flat YAML document:
/// ```text
/// daily_salary: "500.00"
/// regular_work_hours: 8
/// ```
///
/// # Example
///
/// ```no_run
/// use wage_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/payroll.yaml").unwrap();
/// println!("Hourly rate: {}", loader.config().hourly_rate());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the YAML file at `path`.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing or unreadable
    /// - The file contains invalid YAML or is missing a field
    /// - Either constant is not strictly positive
    ///
    /// # Example
    ///
    /// ```no_run
    /// use wage_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/payroll.yaml")?;
    /// # Ok::<(), wage_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse(&content, &path_str)
    }

    /// Parses configuration from YAML text already in memory.
    ///
    /// # Example
    ///
    /// ```
    /// use wage_engine::config::ConfigLoader;
    /// use rust_decimal::Decimal;
    ///
    /// let loader = ConfigLoader::from_yaml_str("daily_salary: \"640\"\nregular_work_hours: 8\n")?;
    /// assert_eq!(loader.config().hourly_rate(), Decimal::from(80));
    /// # Ok::<(), wage_engine::error::EngineError>(())
    /// ```
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        Self::parse(content, "<inline>")
    }

    fn parse(content: &str, origin: &str) -> EngineResult<Self> {
        let config: PayrollConfig =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: origin.to_string(),
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the loaded payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> PayrollConfig {
        self.config
    }
}

impl From<PayrollConfig> for ConfigLoader {
    fn from(config: PayrollConfig) -> Self {
        Self { config }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_bundled_config() {
        let loader = ConfigLoader::load("./config/payroll.yaml").unwrap();
        assert_eq!(loader.config().daily_salary, dec("500"));
        assert_eq!(loader.config().regular_work_hours, 8);
    }

    #[test]
    fn test_missing_file_is_config_not_found() {
        let err = ConfigLoader::load("./config/does_not_exist.yaml").unwrap_err();
        match err {
            EngineError::ConfigNotFound { path } => assert!(path.contains("does_not_exist")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_from_yaml_str_accepts_numeric_salary() {
        let loader = ConfigLoader::from_yaml_str("daily_salary: 720\nregular_work_hours: 9\n").unwrap();
        assert_eq!(loader.config().daily_salary, dec("720"));
        assert_eq!(loader.config().hourly_rate(), dec("80"));
    }

    #[test]
    fn test_missing_field_is_parse_error() {
        let err = ConfigLoader::from_yaml_str("daily_salary: \"500\"\n").unwrap_err();
        match err {
            EngineError::ConfigParseError { path, message } => {
                assert_eq!(path, "<inline>");
                assert!(message.contains("regular_work_hours"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_malformed_yaml_is_parse_error() {
        let err = ConfigLoader::from_yaml_str("daily_salary: [unclosed").unwrap_err();
        assert!(matches!(err, EngineError::ConfigParseError { .. }));
    }

    #[test]
    fn test_non_positive_values_are_rejected() {
        let err = ConfigLoader::from_yaml_str("daily_salary: \"0\"\nregular_work_hours: 8\n")
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig { .. }));
    }

    #[test]
    fn test_default_loader_uses_default_config() {
        let loader = ConfigLoader::default();
        assert_eq!(loader.config(), &PayrollConfig::default());
    }
}
