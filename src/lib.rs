//! Daily Wage Engine
//!
//! This crate computes a worker's pay for one day from clock-in and
//! clock-out times, applying overtime, night-shift and holiday premiums on
//! top of a fixed daily salary. Days can also be aggregated into a weekly
//! payroll, and both computations are exposed over a small HTTP API.
//!
//! # Example
//!
//! ```
//! use wage_engine::calculation::compute_daily_pay;
//! use wage_engine::config::PayrollConfig;
//! use wage_engine::models::{HolidayType, ShiftInput, WorkDay};
//! use rust_decimal::Decimal;
//! use std::str::FromStr;
//!
//! let input = ShiftInput {
//!     day: WorkDay::new(1).unwrap(),
//!     employee_name: "Juan".to_string(),
//!     start_time: "0900".to_string(),
//!     end_time: "2000".to_string(),
//!     holiday_type: HolidayType::None,
//! };
//!
//! let result = compute_daily_pay(&PayrollConfig::default(), &input).unwrap();
//! assert_eq!(result.total_daily_pay, Decimal::from_str("656.25").unwrap());
//! ```

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
