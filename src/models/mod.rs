//! Core data models for the wage engine.
//!
//! This module contains all the domain models used throughout the engine.

mod clock_time;
mod shift;
mod shift_result;
mod weekly_payroll;

pub use clock_time::ClockTime;
pub use shift::{DayType, HolidayType, ShiftInput, WorkDay};
pub use shift_result::{AuditStep, AuditWarning, PayRule, ShiftResult};
pub use weekly_payroll::{DayEntry, DayOutcome, WeeklyPayroll, WeeklyTotals};
