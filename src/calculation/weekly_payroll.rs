//! Weekly payroll for a single employee.
//!
//! Each day is computed independently with [`compute_daily_pay`]. A day that
//! fails (bad clock time, unsupported combination) is recorded as failed and
//! excluded from the totals; the other days are unaffected.

use std::collections::HashSet;

use rust_decimal::Decimal;
use tracing::warn;

use crate::config::PayrollConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{DayEntry, DayOutcome, ShiftInput, WeeklyPayroll, WeeklyTotals};

use super::compute_daily_pay;

/// Computes pay for each supplied day and totals the week.
///
/// Outcomes are returned in day order regardless of input order.
///
/// # Errors
///
/// Returns [`EngineError::DuplicateDay`] if a day index appears more than
/// once. Per-day failures are not errors; they are reported in the outcome.
///
/// # Example
///
/// ```
/// use wage_engine::calculation::compute_weekly_payroll;
/// use wage_engine::config::PayrollConfig;
/// use wage_engine::models::{DayEntry, HolidayType, WorkDay};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let entry = |day: i64, start: &str, end: &str| DayEntry {
///     day: WorkDay::new(day).unwrap(),
///     start_time: start.to_string(),
///     end_time: end.to_string(),
///     holiday_type: HolidayType::None,
/// };
///
/// let payroll = compute_weekly_payroll(
///     &PayrollConfig::default(),
///     "Juan",
///     &[entry(5, "0900", "1800"), entry(6, "0900", "2000"), entry(7, "0900", "9999")],
/// )
/// .unwrap();
///
/// assert_eq!(payroll.totals.days_computed, 2);
/// assert_eq!(payroll.totals.days_failed, 1);
/// // 500 + (500 + 2 × 62.5 × 1.69)
/// assert_eq!(payroll.totals.total_pay, Decimal::from_str("1211.25").unwrap());
/// ```
pub fn compute_weekly_payroll(
    config: &PayrollConfig,
    employee_name: &str,
    entries: &[DayEntry],
) -> EngineResult<WeeklyPayroll> {
    let mut seen = HashSet::with_capacity(entries.len());
    for entry in entries {
        if !seen.insert(entry.day) {
            return Err(EngineError::DuplicateDay {
                day: entry.day.number(),
            });
        }
    }

    let mut ordered: Vec<&DayEntry> = entries.iter().collect();
    ordered.sort_by_key(|entry| entry.day);

    let mut totals = WeeklyTotals {
        total_pay: Decimal::ZERO,
        overtime_pay: Decimal::ZERO,
        days_computed: 0,
        days_failed: 0,
    };

    let days = ordered
        .into_iter()
        .map(|entry| {
            let input = ShiftInput {
                day: entry.day,
                employee_name: employee_name.to_string(),
                start_time: entry.start_time.clone(),
                end_time: entry.end_time.clone(),
                holiday_type: entry.holiday_type,
            };

            match compute_daily_pay(config, &input) {
                Ok(result) => {
                    totals.total_pay += result.total_daily_pay;
                    totals.overtime_pay += result.overtime_pay;
                    totals.days_computed += 1;
                    DayOutcome::Computed {
                        result: Box::new(result),
                    }
                }
                Err(err) => {
                    warn!(day = entry.day.number(), error = %err, "Day could not be computed");
                    totals.days_failed += 1;
                    DayOutcome::Failed {
                        day: entry.day,
                        code: err.code().to_string(),
                        message: err.to_string(),
                    }
                }
            }
        })
        .collect();

    Ok(WeeklyPayroll {
        employee_name: employee_name.to_string(),
        days,
        totals,
    })
}
