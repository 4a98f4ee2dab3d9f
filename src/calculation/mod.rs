//! Calculation logic for the wage engine.
//!
//! This module contains the functions that turn clock-in and clock-out
//! times into pay: time parsing and duration, overtime and night-shift
//! classification, pay rule selection and premium computation, and weekly
//! aggregation over several days.

mod shift_classifier;
mod time_parser;
mod wage_calculator;
mod weekly_payroll;

pub use shift_classifier::{
    MEAL_BREAK_HOURS, NIGHT_SHIFT_END, NIGHT_SHIFT_START, OVERTIME_CAP_HOURS, OvertimeSplit,
    WorkDuration, classify_duration, night_shift_hours, night_shift_span, overtime_hours,
    split_overtime,
};
pub use time_parser::{END_OF_DAY_SENTINEL, compute_duration, duration_between, parse_time};
pub use wage_calculator::{
    EVENING_START_HHMM, NIGHT_SHIFT_DIFFERENTIAL_MULTIPLIER, REGULAR_DAY_NIGHT_OVERTIME_MULTIPLIER,
    REGULAR_DAY_NIGHT_OVERTIME_PREMIUM, REGULAR_DAY_OVERTIME_MULTIPLIER,
    REGULAR_HOLIDAY_OVERTIME_MULTIPLIER, REST_DAY_NIGHT_OVERTIME_MULTIPLIER,
    REST_DAY_NIGHT_OVERTIME_PREMIUM, REST_DAY_OVERTIME_MULTIPLIER, STANDARD_START_HHMM, ShiftStart,
    compute_daily_pay, select_pay_rule,
};
pub use weekly_payroll::compute_weekly_payroll;
