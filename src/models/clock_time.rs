//! Clock time model.
//!
//! This module defines [`ClockTime`], a validated wall-clock time read from
//! an `HHMM` string.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::calculation::parse_time;
use crate::error::EngineError;

/// A validated 24-hour clock time with minute precision.
///
/// Ordering is chronological within a single day, which for validated
/// values is the same as comparing their `HHMM` integers.
///
/// # Example
///
/// ```
/// use wage_engine::models::ClockTime;
///
/// let time: ClockTime = "2230".parse().unwrap();
/// assert_eq!(time.hour(), 22);
/// assert_eq!(time.minute(), 30);
/// assert_eq!(time.as_hhmm(), 2230);
/// assert_eq!(time.to_string(), "2230");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    time: NaiveTime,
}

impl ClockTime {
    /// 00:00, which doubles as the end-of-day sentinel when used as an end time.
    pub const MIDNIGHT: ClockTime = ClockTime {
        time: NaiveTime::MIN,
    };

    /// Creates a clock time from an hour (0-23) and minute (0-59).
    ///
    /// Returns `None` if either component is out of range.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(|time| Self { time })
    }

    /// Returns the hour component (0-23).
    pub fn hour(&self) -> u32 {
        self.time.hour()
    }

    /// Returns the minute component (0-59).
    pub fn minute(&self) -> u32 {
        self.time.minute()
    }

    /// Returns the time as an `HHMM` integer, e.g. 09:30 becomes `930`.
    pub fn as_hhmm(&self) -> u32 {
        self.hour() * 100 + self.minute()
    }

    /// Returns true for 00:00.
    pub fn is_midnight(&self) -> bool {
        *self == Self::MIDNIGHT
    }

    /// Returns the underlying `chrono` time.
    pub fn as_naive_time(&self) -> NaiveTime {
        self.time
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_time(s)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_time(&value)
    }
}

impl From<ClockTime> for String {
    fn from(time: ClockTime) -> Self {
        time.to_string()
    }
}
