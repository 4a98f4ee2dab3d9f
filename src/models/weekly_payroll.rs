//! Weekly payroll models.
//!
//! This module contains the [`DayEntry`] input and the [`WeeklyPayroll`]
//! summary produced when computing several days for one employee.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{HolidayType, ShiftResult, WorkDay};

/// One day's clock times within a weekly payroll request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayEntry {
    /// Day index in the weekly cycle.
    pub day: WorkDay,
    /// Clock-in time as `HHMM`.
    pub start_time: String,
    /// Clock-out time as `HHMM`; `"0000"` means end of day.
    pub end_time: String,
    /// Holiday classification.
    #[serde(default)]
    pub holiday_type: HolidayType,
}

/// The outcome of computing a single day.
///
/// A failed day keeps the error so the rest of the week can still be paid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DayOutcome {
    /// The day was computed.
    Computed {
        /// The full result for the day.
        result: Box<ShiftResult>,
    },
    /// The day could not be computed.
    Failed {
        /// Day index in the weekly cycle.
        day: WorkDay,
        /// Machine-readable error code.
        code: String,
        /// Human-readable error message.
        message: String,
    },
}

impl DayOutcome {
    /// Returns the day this outcome belongs to.
    pub fn day(&self) -> WorkDay {
        match self {
            DayOutcome::Computed { result } => result.day,
            DayOutcome::Failed { day, .. } => *day,
        }
    }

    /// Returns the computed result, if any.
    pub fn result(&self) -> Option<&ShiftResult> {
        match self {
            DayOutcome::Computed { result } => Some(result.as_ref()),
            DayOutcome::Failed { .. } => None,
        }
    }
}

/// Aggregated totals for a week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyTotals {
    /// Sum of total daily pay over computed days.
    pub total_pay: Decimal,
    /// Sum of overtime pay over computed days.
    pub overtime_pay: Decimal,
    /// Number of days that were computed.
    pub days_computed: u32,
    /// Number of days that failed.
    pub days_failed: u32,
}

/// The payroll for one employee over the supplied days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyPayroll {
    /// Employee name, echoed from the request.
    pub employee_name: String,
    /// Per-day outcomes ordered by day index.
    pub days: Vec<DayOutcome>,
    /// Aggregated totals.
    pub totals: WeeklyTotals,
}
