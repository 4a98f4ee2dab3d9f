//! Shift result models for the wage engine.
//!
//! This module contains the [`ShiftResult`] type and its associated structures
//! that capture the outputs of one day's pay computation, including the
//! hour breakdown, the pay rule that was applied, and an audit trail.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{ClockTime, DayType, HolidayType, WorkDay};

/// The premium formula selected for a day.
///
/// # Example
///
/// ```
/// use wage_engine::models::PayRule;
///
/// let rule = PayRule::RestDayNightOvertime;
/// assert_eq!(serde_json::to_string(&rule).unwrap(), "\"rest_day_night_overtime\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayRule {
    /// Regular day on a regular holiday, up to 4 overtime hours (2.6x).
    RegularHolidayOvertime,
    /// Rest day, up to 4 overtime hours (1.69x).
    RestDayOvertime,
    /// Rest day, more than 4 overtime hours (1.859x on the night portion plus 422.50).
    RestDayNightOvertime,
    /// Regular day starting at or after 18:00 (1.10x on night hours covered).
    NightShiftDifferential,
    /// Regular day, up to 4 overtime hours (1.25x).
    RegularDayOvertime,
    /// Regular day, more than 4 overtime hours (1.375x on the night portion plus 312.50).
    RegularDayNightOvertime,
}

impl PayRule {
    /// Returns a stable identifier for audit records.
    pub fn rule_id(&self) -> &'static str {
        match self {
            PayRule::RegularHolidayOvertime => "regular_holiday_overtime",
            PayRule::RestDayOvertime => "rest_day_overtime",
            PayRule::RestDayNightOvertime => "rest_day_night_overtime",
            PayRule::NightShiftDifferential => "night_shift_differential",
            PayRule::RegularDayOvertime => "regular_day_overtime",
            PayRule::RegularDayNightOvertime => "regular_day_night_overtime",
        }
    }

    /// Returns a human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            PayRule::RegularHolidayOvertime => "Regular Holiday Overtime",
            PayRule::RestDayOvertime => "Rest Day Overtime",
            PayRule::RestDayNightOvertime => "Rest Day Night-Shift Overtime",
            PayRule::NightShiftDifferential => "Night Shift Differential",
            PayRule::RegularDayOvertime => "Regular Day Overtime",
            PayRule::RegularDayNightOvertime => "Regular Day Night-Shift Overtime",
        }
    }
}

/// A single step in the audit trail recording a computation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning raised while computing a day.
///
/// Warnings flag inputs that were computed but deserve a second look.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
}

/// The complete result of one day's pay computation.
///
/// `overtime_hours` is the raw difference between work hours and the
/// regular working day and may be negative. `regular_overtime_hours` is
/// capped at 4 and `night_shift_overtime_hours` holds any excess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftResult {
    /// Day index in the weekly cycle.
    pub day: WorkDay,
    /// Regular or rest day.
    pub day_type: DayType,
    /// Holiday classification.
    pub holiday_type: HolidayType,
    /// Employee name, echoed from the input.
    pub employee_name: String,
    /// Parsed clock-in time.
    pub start_time: ClockTime,
    /// Parsed clock-out time.
    pub end_time: ClockTime,
    /// Whole work hours after the meal-break deduction.
    pub work_hours: u32,
    /// Minutes beyond the whole work hours.
    pub work_minutes: u32,
    /// Work hours less the regular working day.
    pub overtime_hours: i64,
    /// Overtime hours paid at the non-night rate.
    pub regular_overtime_hours: i64,
    /// Overtime hours reclassified as night-shift overtime.
    pub night_shift_overtime_hours: i64,
    /// Night hours covered by a shift starting at or after 18:00.
    pub night_shift_hours_covered: u32,
    /// The daily salary from the configuration.
    pub daily_rate: Decimal,
    /// The hourly rate derived from the configuration.
    pub hourly_rate: Decimal,
    /// The premium earned on top of the daily salary.
    pub overtime_pay: Decimal,
    /// Daily salary plus premium.
    pub total_daily_pay: Decimal,
    /// The premium formula that was applied.
    pub pay_rule: PayRule,
    /// Audit steps in the order they were taken.
    pub audit_steps: Vec<AuditStep>,
    /// Warnings raised during the computation.
    pub warnings: Vec<AuditWarning>,
}

impl ShiftResult {
    /// Returns the total daily pay rounded to centavos.
    ///
    /// Rounding uses banker's rounding, matching `rust_decimal`'s default.
    pub fn total_daily_pay_rounded(&self) -> Decimal {
        self.total_daily_pay.round_dp(2)
    }
}
