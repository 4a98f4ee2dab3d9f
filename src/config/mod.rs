//! Configuration loading and management for the wage engine.
//!
//! This module provides the immutable [`PayrollConfig`] (daily salary and
//! regular work hours) and the [`ConfigLoader`] that reads it from YAML.
//!
//! # Example
//!
//! ```no_run
//! use wage_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/payroll.yaml").unwrap();
//! println!("Daily salary: {}", config.config().daily_salary);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DEFAULT_DAILY_SALARY, DEFAULT_REGULAR_WORK_HOURS, PayrollConfig};
