//! Daily wage calculation.
//!
//! This module selects the premium formula for a day and computes the
//! resulting pay. Selection is a decision table over three axes:
//!
//! - **Day type**: regular (days 1-5) or rest (days 6-7)
//! - **Holiday type**: none, regular holiday (HD) or special non-working (SNWH)
//! - **Shift start**: the standard 09:00 start, an evening start at or after
//!   18:00, or anything else
//!
//! ## Rate Structure
//!
//! | Day | Holiday | Start | Overtime | Premium |
//! |---|---|---|---|---|
//! | Regular | HD | 09:00 | ≤ 4h | OT × rate × 2.6 |
//! | Rest | none | 09:00 | ≤ 4h | OT × rate × 1.69 |
//! | Rest | none | 09:00 | > 4h | night OT × rate × 1.859 + 422.50 |
//! | Regular | none | ≥ 18:00 | any | night hours × rate × 1.10 |
//! | Regular | none | 09:00 | ≤ 4h | OT × rate × 1.25 |
//! | Regular | none | 09:00 | > 4h | night OT × rate × 1.375 + 312.50 |
//!
//! Total daily pay is the daily salary plus the premium. Any other
//! combination has no formula and is rejected with
//! [`EngineError::UnsupportedCombination`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::PayrollConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditStep, AuditWarning, ClockTime, DayType, HolidayType, PayRule, ShiftInput, ShiftResult,
};

use super::shift_classifier::{
    OVERTIME_CAP_HOURS, classify_duration, night_shift_hours, overtime_hours, split_overtime,
};
use super::time_parser::{duration_between, parse_time};

/// Overtime multiplier on a regular day.
pub const REGULAR_DAY_OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(125, 0, 0, false, 2);

/// Night overtime multiplier on a regular day.
pub const REGULAR_DAY_NIGHT_OVERTIME_MULTIPLIER: Decimal =
    Decimal::from_parts(1375, 0, 0, false, 3);

/// Fixed premium added to night overtime on a regular day.
pub const REGULAR_DAY_NIGHT_OVERTIME_PREMIUM: Decimal = Decimal::from_parts(31250, 0, 0, false, 2);

/// Overtime multiplier on a rest day.
pub const REST_DAY_OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(169, 0, 0, false, 2);

/// Night overtime multiplier on a rest day.
pub const REST_DAY_NIGHT_OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(1859, 0, 0, false, 3);

/// Fixed premium added to night overtime on a rest day.
pub const REST_DAY_NIGHT_OVERTIME_PREMIUM: Decimal = Decimal::from_parts(42250, 0, 0, false, 2);

/// Overtime multiplier on a regular holiday.
pub const REGULAR_HOLIDAY_OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(26, 0, 0, false, 1);

/// Multiplier on night hours for shifts starting in the evening.
pub const NIGHT_SHIFT_DIFFERENTIAL_MULTIPLIER: Decimal = Decimal::from_parts(110, 0, 0, false, 2);

/// The standard clock-in time as an `HHMM` integer.
pub const STANDARD_START_HHMM: u32 = 900;

/// Clock-in times at or after this `HHMM` value are evening starts.
pub const EVENING_START_HHMM: u32 = 1800;

/// How a shift's clock-in time is classified for premium selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftStart {
    /// Clock-in at exactly 09:00.
    Standard,
    /// Clock-in at or after 18:00.
    Evening,
    /// Any other clock-in time.
    Other,
}

impl ShiftStart {
    /// Classifies a clock-in time.
    ///
    /// # Example
    ///
    /// ```
    /// use wage_engine::calculation::ShiftStart;
    /// use wage_engine::models::ClockTime;
    ///
    /// let t = |s: &str| s.parse::<ClockTime>().unwrap();
    /// assert_eq!(ShiftStart::of(t("0900")), ShiftStart::Standard);
    /// assert_eq!(ShiftStart::of(t("1800")), ShiftStart::Evening);
    /// assert_eq!(ShiftStart::of(t("2330")), ShiftStart::Evening);
    /// assert_eq!(ShiftStart::of(t("0800")), ShiftStart::Other);
    /// ```
    pub fn of(start_time: ClockTime) -> Self {
        let hhmm = start_time.as_hhmm();
        if hhmm == STANDARD_START_HHMM {
            ShiftStart::Standard
        } else if hhmm >= EVENING_START_HHMM {
            ShiftStart::Evening
        } else {
            ShiftStart::Other
        }
    }
}

/// Selects the pay rule for a day, or `None` if no formula covers it.
///
/// # Examples
///
/// ```
/// use wage_engine::calculation::{ShiftStart, select_pay_rule};
/// use wage_engine::models::{DayType, HolidayType, PayRule};
///
/// assert_eq!(
///     select_pay_rule(DayType::Rest, HolidayType::None, ShiftStart::Standard, 6),
///     Some(PayRule::RestDayNightOvertime)
/// );
/// assert_eq!(
///     select_pay_rule(DayType::Regular, HolidayType::SpecialNonWorking, ShiftStart::Standard, 2),
///     None
/// );
/// ```
pub fn select_pay_rule(
    day_type: DayType,
    holiday_type: HolidayType,
    shift_start: ShiftStart,
    overtime_hours: i64,
) -> Option<PayRule> {
    let within_cap = overtime_hours <= OVERTIME_CAP_HOURS;

    match (day_type, holiday_type, shift_start) {
        (DayType::Regular, HolidayType::Regular, ShiftStart::Standard) if within_cap => {
            Some(PayRule::RegularHolidayOvertime)
        }
        (DayType::Rest, HolidayType::None, ShiftStart::Standard) if within_cap => {
            Some(PayRule::RestDayOvertime)
        }
        (DayType::Rest, HolidayType::None, ShiftStart::Standard) => {
            Some(PayRule::RestDayNightOvertime)
        }
        (DayType::Regular, HolidayType::None, ShiftStart::Evening) => {
            Some(PayRule::NightShiftDifferential)
        }
        (DayType::Regular, HolidayType::None, ShiftStart::Standard) if within_cap => {
            Some(PayRule::RegularDayOvertime)
        }
        (DayType::Regular, HolidayType::None, ShiftStart::Standard) => {
            Some(PayRule::RegularDayNightOvertime)
        }

        // Special non-working holidays have no formula.
        (_, HolidayType::SpecialNonWorking, _) => None,
        // Regular holidays are only covered on a regular day, 09:00 start, within the cap.
        (DayType::Regular, HolidayType::Regular, _) => None,
        (DayType::Rest, HolidayType::Regular, _) => None,
        // Rest days are only covered with a 09:00 start.
        (DayType::Rest, HolidayType::None, ShiftStart::Evening | ShiftStart::Other) => None,
        (DayType::Regular, HolidayType::None, ShiftStart::Other) => None,
    }
}

/// Computes one day's pay.
///
/// Parses both clock times, classifies the work duration, selects the pay
/// rule and applies its formula. The returned [`ShiftResult`] carries the
/// hour breakdown, the pay, and an audit trail of three steps.
///
/// # Errors
///
/// - [`EngineError::InvalidTimeFormat`] if either clock time is invalid
/// - [`EngineError::UnsupportedCombination`] if no pay rule covers the day
///
/// # Examples
///
/// ## Two hours of overtime on a regular day
///
/// ```
/// use wage_engine::calculation::compute_daily_pay;
/// use wage_engine::config::PayrollConfig;
/// use wage_engine::models::{HolidayType, ShiftInput, WorkDay};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let input = ShiftInput {
///     day: WorkDay::new(1).unwrap(),
///     employee_name: "Juan".to_string(),
///     start_time: "0900".to_string(),
///     end_time: "2000".to_string(),
///     holiday_type: HolidayType::None,
/// };
/// let result = compute_daily_pay(&PayrollConfig::default(), &input).unwrap();
///
/// assert_eq!(result.overtime_hours, 2);
/// // 2 hours × $62.50 × 1.25 = $156.25
/// assert_eq!(result.overtime_pay, Decimal::from_str("156.25").unwrap());
/// assert_eq!(result.total_daily_pay, Decimal::from_str("656.25").unwrap());
/// ```
///
/// ## A special non-working holiday is rejected
///
/// ```
/// use wage_engine::calculation::compute_daily_pay;
/// use wage_engine::config::PayrollConfig;
/// use wage_engine::error::EngineError;
/// use wage_engine::models::{HolidayType, ShiftInput, WorkDay};
///
/// let input = ShiftInput {
///     day: WorkDay::new(2).unwrap(),
///     employee_name: "Juan".to_string(),
///     start_time: "0900".to_string(),
///     end_time: "1800".to_string(),
///     holiday_type: HolidayType::SpecialNonWorking,
/// };
/// let err = compute_daily_pay(&PayrollConfig::default(), &input).unwrap_err();
/// assert!(matches!(err, EngineError::UnsupportedCombination { .. }));
/// ```
pub fn compute_daily_pay(config: &PayrollConfig, input: &ShiftInput) -> EngineResult<ShiftResult> {
    let start_time = parse_time(&input.start_time)?;
    let end_time = parse_time(&input.end_time)?;

    let day_type = input.day.day_type();
    let holiday_type = input.holiday_type;
    let hourly_rate = config.hourly_rate();

    let mut audit_steps = Vec::with_capacity(3);
    let mut warnings = Vec::new();

    // Step 1: work duration
    let duration = duration_between(start_time, end_time);
    let work = classify_duration(duration, end_time);

    if end_time.is_midnight() {
        warnings.push(AuditWarning {
            code: "END_OF_DAY_SENTINEL".to_string(),
            message: "End time 0000 was treated as the end of the day".to_string(),
        });
    }

    audit_steps.push(AuditStep {
        step_number: 1,
        rule_id: "work_duration".to_string(),
        rule_name: "Work Duration".to_string(),
        input: serde_json::json!({
            "start_time": start_time.to_string(),
            "end_time": end_time.to_string()
        }),
        output: serde_json::json!({
            "work_hours": work.hours,
            "work_minutes": work.minutes
        }),
        reasoning: format!(
            "{} to {} less a 1 hour meal break is {} hours {} minutes",
            start_time, end_time, work.hours, work.minutes
        ),
    });

    // Step 2: overtime classification
    let overtime = overtime_hours(work.hours, config.regular_work_hours);
    let split = split_overtime(overtime);

    audit_steps.push(AuditStep {
        step_number: 2,
        rule_id: "overtime_classification".to_string(),
        rule_name: "Overtime Classification".to_string(),
        input: serde_json::json!({
            "work_hours": work.hours,
            "regular_work_hours": config.regular_work_hours
        }),
        output: serde_json::json!({
            "overtime_hours": overtime,
            "regular_overtime_hours": split.regular_hours,
            "night_shift_overtime_hours": split.night_hours
        }),
        reasoning: if split.has_night_overtime() {
            format!(
                "{} overtime hours exceed the {} hour cap; {} hours reclassified as night overtime",
                overtime, OVERTIME_CAP_HOURS, split.night_hours
            )
        } else {
            format!(
                "{} work hours against a {} hour day gives {} overtime hours",
                work.hours, config.regular_work_hours, overtime
            )
        },
    });

    // Step 3: pay rule
    let shift_start = ShiftStart::of(start_time);
    let pay_rule = select_pay_rule(day_type, holiday_type, shift_start, overtime).ok_or_else(
        || EngineError::UnsupportedCombination {
            day_type: day_type.to_string(),
            holiday_type: holiday_type.code().to_string(),
            start_time: start_time.to_string(),
            overtime_hours: overtime,
        },
    )?;

    let payable_overtime = Decimal::from(overtime.max(0));
    let night_overtime = Decimal::from(split.night_hours);

    let (regular_overtime_hours, night_shift_overtime_hours, night_shift_hours_covered) =
        if pay_rule == PayRule::NightShiftDifferential {
            (0, 0, night_shift_hours(start_time, end_time))
        } else {
            (split.regular_hours.max(0), split.night_hours, 0)
        };

    let (hours, multiplier, premium) = match pay_rule {
        PayRule::RegularHolidayOvertime => (
            payable_overtime,
            REGULAR_HOLIDAY_OVERTIME_MULTIPLIER,
            Decimal::ZERO,
        ),
        PayRule::RestDayOvertime => (
            payable_overtime,
            REST_DAY_OVERTIME_MULTIPLIER,
            Decimal::ZERO,
        ),
        PayRule::RestDayNightOvertime => (
            night_overtime,
            REST_DAY_NIGHT_OVERTIME_MULTIPLIER,
            REST_DAY_NIGHT_OVERTIME_PREMIUM,
        ),
        PayRule::NightShiftDifferential => (
            Decimal::from(night_shift_hours_covered),
            NIGHT_SHIFT_DIFFERENTIAL_MULTIPLIER,
            Decimal::ZERO,
        ),
        PayRule::RegularDayOvertime => (
            payable_overtime,
            REGULAR_DAY_OVERTIME_MULTIPLIER,
            Decimal::ZERO,
        ),
        PayRule::RegularDayNightOvertime => (
            night_overtime,
            REGULAR_DAY_NIGHT_OVERTIME_MULTIPLIER,
            REGULAR_DAY_NIGHT_OVERTIME_PREMIUM,
        ),
    };

    let overtime_pay = hours * hourly_rate * multiplier + premium;
    let total_daily_pay = config.daily_salary + overtime_pay;

    if overtime < 0 && pay_rule != PayRule::NightShiftDifferential {
        warnings.push(AuditWarning {
            code: "UNDERTIME".to_string(),
            message: format!(
                "{} work hours is {} short of the {} hour day; no deduction applied",
                work.hours, -overtime, config.regular_work_hours
            ),
        });
    }

    audit_steps.push(AuditStep {
        step_number: 3,
        rule_id: pay_rule.rule_id().to_string(),
        rule_name: pay_rule.name().to_string(),
        input: serde_json::json!({
            "day_type": day_type.to_string(),
            "holiday_type": holiday_type.code(),
            "hours": hours.normalize().to_string(),
            "hourly_rate": hourly_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "multiplier": multiplier.normalize().to_string(),
            "premium": premium.normalize().to_string(),
            "overtime_pay": overtime_pay.normalize().to_string(),
            "total_daily_pay": total_daily_pay.normalize().to_string()
        }),
        reasoning: format!(
            "{} hours × ${} × {} + ${} = ${}; total ${} + ${} = ${}",
            hours.normalize(),
            hourly_rate.normalize(),
            multiplier.normalize(),
            premium.normalize(),
            overtime_pay.normalize(),
            config.daily_salary.normalize(),
            overtime_pay.normalize(),
            total_daily_pay.normalize()
        ),
    });

    debug!(
        day = input.day.number(),
        rule = pay_rule.rule_id(),
        overtime_hours = overtime,
        total = %total_daily_pay,
        "Computed daily pay"
    );

    Ok(ShiftResult {
        day: input.day,
        day_type,
        holiday_type,
        employee_name: input.employee_name.clone(),
        start_time,
        end_time,
        work_hours: work.hours,
        work_minutes: work.minutes,
        overtime_hours: overtime,
        regular_overtime_hours,
        night_shift_overtime_hours,
        night_shift_hours_covered,
        daily_rate: config.daily_salary,
        hourly_rate,
        overtime_pay,
        total_daily_pay,
        pay_rule,
        audit_steps,
        warnings,
    })
}
