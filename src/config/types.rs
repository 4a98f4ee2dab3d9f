//! Configuration types for wage computation.
//!
//! This module contains the strongly-typed configuration structure that
//! is deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Default daily salary used when no configuration file is supplied.
pub const DEFAULT_DAILY_SALARY: Decimal = Decimal::from_parts(500, 0, 0, false, 0);

/// Default number of regular work hours in a day.
pub const DEFAULT_REGULAR_WORK_HOURS: u32 = 8;

/// The payroll constants for one run of the engine.
///
/// A `PayrollConfig` is read-only once built and is passed by reference
/// into every computation.
///
/// # Example
///
/// ```
/// use wage_engine::config::PayrollConfig;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let config = PayrollConfig::default();
/// assert_eq!(config.daily_salary, Decimal::from(500));
/// assert_eq!(config.regular_work_hours, 8);
/// assert_eq!(config.hourly_rate(), Decimal::from_str("62.5").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollConfig {
    /// The pay for a regular working day.
    pub daily_salary: Decimal,
    /// The number of hours in a regular working day.
    pub regular_work_hours: u32,
}

impl Default for PayrollConfig {
    fn default() -> Self {
        Self {
            daily_salary: DEFAULT_DAILY_SALARY,
            regular_work_hours: DEFAULT_REGULAR_WORK_HOURS,
        }
    }
}

impl PayrollConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] if the salary or the work hours
    /// are not strictly positive.
    pub fn new(daily_salary: Decimal, regular_work_hours: u32) -> EngineResult<Self> {
        let config = Self {
            daily_salary,
            regular_work_hours,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks that both constants are strictly positive.
    pub fn validate(&self) -> EngineResult<()> {
        if self.daily_salary <= Decimal::ZERO {
            return Err(EngineError::InvalidConfig {
                field: "daily_salary".to_string(),
                message: format!("must be greater than zero, got {}", self.daily_salary),
            });
        }
        if self.regular_work_hours == 0 {
            return Err(EngineError::InvalidConfig {
                field: "regular_work_hours".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the hourly rate: daily salary divided by regular work hours.
    pub fn hourly_rate(&self) -> Decimal {
        self.daily_salary / Decimal::from(self.regular_work_hours)
    }
}
