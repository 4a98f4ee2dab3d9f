//! Request types for the wage engine API.
//!
//! This module defines the JSON request structures for the `/daily-pay`
//! and `/weekly-payroll` endpoints. Fields arrive as plain JSON values and
//! are validated into domain types by the `TryFrom` conversions, so that
//! an out-of-range day or an unknown holiday code is reported with the
//! engine's own error code.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{DayEntry, HolidayType, ShiftInput, WorkDay};

/// Request body for the `/daily-pay` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyPayRequest {
    /// Day index, 1 to 7.
    pub day: i64,
    /// Employee name, echoed in the result.
    pub employee_name: String,
    /// Clock-in time as `HHMM`.
    pub start_time: String,
    /// Clock-out time as `HHMM`.
    pub end_time: String,
    /// Holiday code: `""`, `"HD"` or `"SNWH"`.
    #[serde(default)]
    pub holiday_type: String,
}

/// One day within a `/weekly-payroll` request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayEntryRequest {
    /// Day index, 1 to 7.
    pub day: i64,
    /// Clock-in time as `HHMM`.
    pub start_time: String,
    /// Clock-out time as `HHMM`.
    pub end_time: String,
    /// Holiday code: `""`, `"HD"` or `"SNWH"`.
    #[serde(default)]
    pub holiday_type: String,
}

/// Request body for the `/weekly-payroll` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyPayrollRequest {
    /// Employee name, echoed in the result.
    pub employee_name: String,
    /// The days worked.
    pub days: Vec<DayEntryRequest>,
}

impl TryFrom<DailyPayRequest> for ShiftInput {
    type Error = EngineError;

    fn try_from(req: DailyPayRequest) -> Result<Self, Self::Error> {
        Ok(ShiftInput {
            day: WorkDay::new(req.day)?,
            employee_name: req.employee_name,
            start_time: req.start_time,
            end_time: req.end_time,
            holiday_type: req.holiday_type.parse::<HolidayType>()?,
        })
    }
}

impl TryFrom<DayEntryRequest> for DayEntry {
    type Error = EngineError;

    fn try_from(req: DayEntryRequest) -> Result<Self, Self::Error> {
        Ok(DayEntry {
            day: WorkDay::new(req.day)?,
            start_time: req.start_time,
            end_time: req.end_time,
            holiday_type: req.holiday_type.parse::<HolidayType>()?,
        })
    }
}

impl WeeklyPayrollRequest {
    /// Validates every day entry, failing on the first invalid one.
    pub fn into_entries(self) -> EngineResult<(String, Vec<DayEntry>)> {
        let entries = self
            .days
            .into_iter()
            .map(DayEntry::try_from)
            .collect::<EngineResult<Vec<_>>>()?;
        Ok((self.employee_name, entries))
    }
}
