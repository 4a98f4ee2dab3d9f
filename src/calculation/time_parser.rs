//! Clock time parsing and duration arithmetic.
//!
//! This module validates `HHMM` clock strings and computes the raw wall-clock
//! duration between a clock-in and a clock-out time.
//!
//! ## End-of-day sentinel
//!
//! `"0000"` as an end time means "worked until midnight". For the duration
//! arithmetic it is replaced by 23:59; the missing minute is added back by
//! [`classify_duration`](super::classify_duration).

use chrono::TimeDelta;

use crate::error::{EngineError, EngineResult};
use crate::models::ClockTime;

/// The literal end-of-day sentinel.
pub const END_OF_DAY_SENTINEL: &str = "0000";

/// Parses an `HHMM` string into a [`ClockTime`].
///
/// Accepts exactly four ASCII digits with the hour in `00..=23` and the
/// minute in `00..=59`. `"0000"` is always accepted.
///
/// # Errors
///
/// Returns [`EngineError::InvalidTimeFormat`] for the wrong length,
/// non-digit characters, or an out-of-range hour or minute.
///
/// # Examples
///
/// ```
/// use wage_engine::calculation::parse_time;
///
/// assert_eq!(parse_time("0930").unwrap().as_hhmm(), 930);
/// assert!(parse_time("0000").unwrap().is_midnight());
/// assert!(parse_time("2500").is_err());
/// assert!(parse_time("99").is_err());
/// ```
pub fn parse_time(s: &str) -> EngineResult<ClockTime> {
    if s == END_OF_DAY_SENTINEL {
        return Ok(ClockTime::MIDNIGHT);
    }

    let bytes = s.as_bytes();
    if bytes.len() != 4 || !bytes.iter().all(u8::is_ascii_digit) {
        return Err(EngineError::invalid_time(s));
    }

    let digit = |i: usize| u32::from(bytes[i] - b'0');
    let hour = digit(0) * 10 + digit(1);
    let minute = digit(2) * 10 + digit(3);

    ClockTime::from_hm(hour, minute).ok_or_else(|| EngineError::invalid_time(s))
}

/// Computes the wall-clock duration from `start` to `end`.
///
/// Both strings are validated with [`parse_time`] first. An `end` of
/// `"0000"` is treated as 23:59. No wraparound is applied: a clock-out
/// earlier than the clock-in yields a negative duration.
///
/// # Errors
///
/// Returns [`EngineError::InvalidTimeFormat`] if either time is invalid.
///
/// # Examples
///
/// ```
/// use wage_engine::calculation::compute_duration;
///
/// assert_eq!(compute_duration("0900", "1800").unwrap().num_minutes(), 540);
/// assert_eq!(compute_duration("0900", "0000").unwrap().num_minutes(), 899);
/// assert_eq!(compute_duration("1800", "0600").unwrap().num_minutes(), -720);
/// ```
pub fn compute_duration(start: &str, end: &str) -> EngineResult<TimeDelta> {
    let start = parse_time(start)?;
    let end = parse_time(end)?;
    Ok(duration_between(start, end))
}

/// Computes the wall-clock duration between two parsed clock times.
///
/// Applies the same end-of-day substitution as [`compute_duration`].
pub fn duration_between(start: ClockTime, end: ClockTime) -> TimeDelta {
    let end = if end.is_midnight() {
        last_minute_of_day()
    } else {
        end
    };
    end.as_naive_time()
        .signed_duration_since(start.as_naive_time())
}

fn last_minute_of_day() -> ClockTime {
    ClockTime::from_hm(23, 59).unwrap_or(ClockTime::MIDNIGHT)
}
