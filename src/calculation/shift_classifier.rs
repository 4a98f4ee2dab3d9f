//! Shift classification: work duration, overtime and night-shift coverage.
//!
//! This module turns a raw wall-clock duration into the whole work hours and
//! minutes that pay is computed on, works out overtime against the regular
//! working day, and measures how much of a shift falls in the night window.
//!
//! ## Work duration
//!
//! One hour is deducted from the clock span for the meal break, so
//! 09:00 to 18:00 is 8 work hours. A negative span (clock-out on the next
//! day) is wrapped back into `0..24` hours.
//!
//! ## Night-shift coverage
//!
//! Night coverage is measured on `HHMM` integers rather than real clock
//! arithmetic: 22:00 to 06:00 yields `800`, which the caller truncates to
//! 8 hours by dividing by 100. Minutes therefore only ever affect the result
//! through that truncation.

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use crate::models::ClockTime;

/// Hours deducted from every shift for the meal break.
pub const MEAL_BREAK_HOURS: i64 = 1;

/// The most overtime hours paid at the non-night rate.
pub const OVERTIME_CAP_HOURS: i64 = 4;

/// Start of the night window as an `HHMM` integer.
pub const NIGHT_SHIFT_START: u32 = 2200;

/// End of the night window as an `HHMM` integer.
pub const NIGHT_SHIFT_END: u32 = 600;

/// Whole work hours and remaining minutes for a shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkDuration {
    /// Whole hours worked after the meal-break deduction.
    pub hours: u32,
    /// Minutes beyond the whole hours (0-59).
    pub minutes: u32,
}

/// Overtime split between the capped regular portion and the night portion.
///
/// # Example
///
/// ```
/// use wage_engine::calculation::split_overtime;
///
/// let split = split_overtime(6);
/// assert_eq!(split.regular_hours, 4);
/// assert_eq!(split.night_hours, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeSplit {
    /// Overtime hours paid at the non-night rate (never more than 4).
    pub regular_hours: i64,
    /// Overtime hours reclassified as night-shift overtime.
    pub night_hours: i64,
}

impl OvertimeSplit {
    /// Returns true if any overtime was reclassified as night overtime.
    pub fn has_night_overtime(&self) -> bool {
        self.night_hours > 0
    }
}

/// Converts a raw clock duration into work hours and minutes.
///
/// `hours` is the floored hour count less the meal break, wrapped into
/// `0..24`. `minutes` is the floored minute count modulo 60. When `end_time`
/// is the midnight sentinel, one minute is added back to undo the 23:59
/// substitution made by [`compute_duration`](super::compute_duration),
/// carrying into the hours on reaching 60.
///
/// # Examples
///
/// ```
/// use wage_engine::calculation::{classify_duration, compute_duration, parse_time};
///
/// let duration = compute_duration("0900", "1800").unwrap();
/// let work = classify_duration(duration, parse_time("1800").unwrap());
/// assert_eq!((work.hours, work.minutes), (8, 0));
///
/// // 0900 to end of day: 14h59m less the break, plus the sentinel minute.
/// let duration = compute_duration("0900", "0000").unwrap();
/// let work = classify_duration(duration, parse_time("0000").unwrap());
/// assert_eq!((work.hours, work.minutes), (14, 0));
/// ```
pub fn classify_duration(duration: TimeDelta, end_time: ClockTime) -> WorkDuration {
    let total_minutes = duration.num_minutes();

    let mut hours = (total_minutes.div_euclid(60) - MEAL_BREAK_HOURS).rem_euclid(24);
    let mut minutes = total_minutes.rem_euclid(60);

    if end_time.is_midnight() {
        minutes += 1;
        if minutes == 60 {
            minutes = 0;
            hours += 1;
        }
    }

    WorkDuration {
        hours: hours as u32,
        minutes: minutes as u32,
    }
}

/// Returns overtime hours: work hours less the regular working day.
///
/// The result is negative for short days.
pub fn overtime_hours(work_hours: u32, regular_work_hours: u32) -> i64 {
    i64::from(work_hours) - i64::from(regular_work_hours)
}

/// Splits overtime at the 4-hour cap.
///
/// Up to 4 hours stay regular overtime; any excess is reclassified
/// wholesale as night overtime regardless of when it was actually worked.
pub fn split_overtime(overtime_hours: i64) -> OvertimeSplit {
    if overtime_hours > OVERTIME_CAP_HOURS {
        OvertimeSplit {
            regular_hours: OVERTIME_CAP_HOURS,
            night_hours: overtime_hours - OVERTIME_CAP_HOURS,
        }
    } else {
        OvertimeSplit {
            regular_hours: overtime_hours,
            night_hours: 0,
        }
    }
}

/// Measures night-window coverage as an `HHMM`-integer span.
///
/// An end of 00:00 counts as `2400`. Shifts starting at or after 22:00
/// measure from 22:00 to the end, wrapping past midnight. Earlier starts
/// that end inside the night window (at or before 06:00) cover 22:00 to
/// midnight plus midnight to the end. Anything else covers nothing.
///
/// # Examples
///
/// ```
/// use wage_engine::calculation::{night_shift_span, parse_time};
///
/// let t = |s: &str| parse_time(s).unwrap();
/// assert_eq!(night_shift_span(t("2200"), t("0600")), 800);
/// assert_eq!(night_shift_span(t("1800"), t("0600")), 800);
/// assert_eq!(night_shift_span(t("2200"), t("0000")), 200);
/// assert_eq!(night_shift_span(t("0900"), t("1800")), 0);
/// ```
pub fn night_shift_span(start_time: ClockTime, end_time: ClockTime) -> u32 {
    let start = start_time.as_hhmm();
    let end = if end_time.is_midnight() {
        2400
    } else {
        end_time.as_hhmm()
    };

    if start >= NIGHT_SHIFT_START {
        if end >= NIGHT_SHIFT_START {
            end - NIGHT_SHIFT_START
        } else {
            end + 2400 - NIGHT_SHIFT_START
        }
    } else if end <= NIGHT_SHIFT_END {
        end + (2400 - NIGHT_SHIFT_START)
    } else {
        0
    }
}

/// Whole night-shift hours covered: [`night_shift_span`] divided by 100.
pub fn night_shift_hours(start_time: ClockTime, end_time: ClockTime) -> u32 {
    night_shift_span(start_time, end_time) / 100
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::{compute_duration, parse_time};
    use proptest::prelude::*;

    fn t(s: &str) -> ClockTime {
        parse_time(s).unwrap()
    }

    fn classify(start: &str, end: &str) -> WorkDuration {
        classify_duration(compute_duration(start, end).unwrap(), t(end))
    }

    #[test]
    fn test_regular_day_deducts_meal_break() {
        assert_eq!(classify("0900", "1800"), WorkDuration { hours: 8, minutes: 0 });
    }

    #[test]
    fn test_partial_hour_keeps_minutes() {
        assert_eq!(classify("0900", "1845"), WorkDuration { hours: 8, minutes: 45 });
    }

    #[test]
    fn test_end_of_day_sentinel_restores_midnight() {
        // 0900 to 2359 is 14h59m; the sentinel minute carries into the hours.
        assert_eq!(classify("0900", "0000"), WorkDuration { hours: 14, minutes: 0 });
    }

    #[test]
    fn test_end_of_day_sentinel_without_carry() {
        // 0930 to 2359 is 14h29m, plus one minute.
        assert_eq!(classify("0930", "0000"), WorkDuration { hours: 13, minutes: 30 });
    }

    #[test]
    fn test_overnight_shift_wraps() {
        // -12h floors to -12, less the break is -13, wrapped to 11.
        assert_eq!(classify("1800", "0600"), WorkDuration { hours: 11, minutes: 0 });
    }

    #[test]
    fn test_overnight_shift_with_minutes_floors() {
        // -12h30m floors to -13 hours and 30 minutes.
        assert_eq!(classify("1830", "0600"), WorkDuration { hours: 10, minutes: 30 });
    }

    #[test]
    fn test_shift_shorter_than_meal_break_wraps() {
        // 30 minutes floors to 0 hours, less the break is -1, wrapped to 23.
        assert_eq!(classify("0900", "0930"), WorkDuration { hours: 23, minutes: 30 });
    }

    #[test]
    fn test_overtime_hours_sign() {
        assert_eq!(overtime_hours(10, 8), 2);
        assert_eq!(overtime_hours(8, 8), 0);
        assert_eq!(overtime_hours(5, 8), -3);
    }

    #[test]
    fn test_split_overtime_at_cap() {
        assert_eq!(
            split_overtime(4),
            OvertimeSplit { regular_hours: 4, night_hours: 0 }
        );
        assert!(!split_overtime(4).has_night_overtime());
    }

    #[test]
    fn test_split_overtime_above_cap() {
        assert_eq!(
            split_overtime(5),
            OvertimeSplit { regular_hours: 4, night_hours: 1 }
        );
        assert!(split_overtime(5).has_night_overtime());
    }

    #[test]
    fn test_split_overtime_negative_is_untouched() {
        assert_eq!(
            split_overtime(-2),
            OvertimeSplit { regular_hours: -2, night_hours: 0 }
        );
    }

    #[test]
    fn test_night_span_from_six_pm_to_six_am() {
        assert_eq!(night_shift_span(t("1800"), t("0600")), 800);
        assert_eq!(night_shift_hours(t("1800"), t("0600")), 8);
    }

    #[test]
    fn test_night_span_ending_before_window_end() {
        assert_eq!(night_shift_span(t("1900"), t("0400")), 600);
    }

    #[test]
    fn test_night_span_ending_after_window_is_zero() {
        assert_eq!(night_shift_span(t("1800"), t("0700")), 0);
        assert_eq!(night_shift_span(t("1800"), t("2300")), 0);
    }

    #[test]
    fn test_night_span_evening_start_to_midnight_is_zero() {
        // Midnight counts as 2400, which is outside the early-morning window.
        assert_eq!(night_shift_span(t("1800"), t("0000")), 0);
    }

    #[test]
    fn test_night_span_late_start_wraps() {
        assert_eq!(night_shift_span(t("2200"), t("0600")), 800);
        assert_eq!(night_shift_span(t("2300"), t("2330")), 130);
        assert_eq!(night_shift_span(t("2200"), t("0000")), 200);
    }

    #[test]
    fn test_night_span_uses_integer_arithmetic() {
        // 2230 is measured from 2200, not from half past ten.
        assert_eq!(night_shift_span(t("2230"), t("0530")), 730);
        assert_eq!(night_shift_hours(t("2230"), t("0530")), 7);
    }

    proptest! {
        #[test]
        fn prop_work_minutes_below_sixty(
            sh in 0u32..24, sm in 0u32..60, eh in 0u32..24, em in 0u32..60
        ) {
            let start = format!("{sh:02}{sm:02}");
            let end = format!("{eh:02}{em:02}");
            let work = classify(&start, &end);
            prop_assert!(work.minutes < 60);
            prop_assert!(work.hours <= 24);
        }

        #[test]
        fn prop_regular_overtime_never_exceeds_cap(overtime in -24i64..24) {
            let split = split_overtime(overtime);
            prop_assert!(split.regular_hours <= OVERTIME_CAP_HOURS);
            prop_assert!(split.night_hours >= 0);
            prop_assert_eq!(split.regular_hours + split.night_hours, overtime);
        }
    }
}
