//! Shift input model and related types.
//!
//! This module defines [`ShiftInput`], one day's clock-in/clock-out request,
//! together with the day and holiday designations it carries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The kind of day for premium selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Days 1 to 5 of the weekly cycle.
    Regular,
    /// Days 6 and 7 of the weekly cycle.
    Rest,
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayType::Regular => write!(f, "regular"),
            DayType::Rest => write!(f, "rest"),
        }
    }
}

/// A day index in the weekly cycle, 1 to 7.
///
/// # Example
///
/// ```
/// use wage_engine::models::{DayType, WorkDay};
///
/// let friday = WorkDay::new(5).unwrap();
/// assert_eq!(friday.day_type(), DayType::Regular);
///
/// let saturday = WorkDay::new(6).unwrap();
/// assert!(saturday.is_rest_day());
///
/// assert!(WorkDay::new(8).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct WorkDay(u8);

impl WorkDay {
    /// Creates a day index, rejecting anything outside 1 to 7.
    pub fn new(day: i64) -> EngineResult<Self> {
        match u8::try_from(day) {
            Ok(d @ 1..=7) => Ok(Self(d)),
            _ => Err(EngineError::InvalidDay { day }),
        }
    }

    /// Returns the day index.
    pub fn number(&self) -> u8 {
        self.0
    }

    /// Returns true for days 6 and 7.
    pub fn is_rest_day(&self) -> bool {
        self.0 >= 6
    }

    /// Returns the day type used for premium selection.
    pub fn day_type(&self) -> DayType {
        if self.is_rest_day() {
            DayType::Rest
        } else {
            DayType::Regular
        }
    }
}

impl TryFrom<i64> for WorkDay {
    type Error = EngineError;

    fn try_from(day: i64) -> Result<Self, Self::Error> {
        Self::new(day)
    }
}

impl From<WorkDay> for u8 {
    fn from(day: WorkDay) -> Self {
        day.0
    }
}

impl fmt::Display for WorkDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Holiday classification for a day.
///
/// Serialized by its payroll code: `""`, `"HD"` or `"SNWH"`.
///
/// # Example
///
/// ```
/// use wage_engine::models::HolidayType;
///
/// assert_eq!("hd".parse::<HolidayType>().unwrap(), HolidayType::Regular);
/// assert_eq!("".parse::<HolidayType>().unwrap(), HolidayType::None);
/// assert_eq!(HolidayType::SpecialNonWorking.code(), "SNWH");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum HolidayType {
    /// Not a holiday.
    #[default]
    None,
    /// Regular holiday (HD).
    Regular,
    /// Special non-working holiday (SNWH).
    SpecialNonWorking,
}

impl HolidayType {
    /// Returns the payroll code for this holiday type.
    pub fn code(&self) -> &'static str {
        match self {
            HolidayType::None => "",
            HolidayType::Regular => "HD",
            HolidayType::SpecialNonWorking => "SNWH",
        }
    }

    /// Returns true for either kind of holiday.
    pub fn is_holiday(&self) -> bool {
        *self != HolidayType::None
    }
}

impl fmt::Display for HolidayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for HolidayType {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "" => Ok(HolidayType::None),
            "HD" => Ok(HolidayType::Regular),
            "SNWH" => Ok(HolidayType::SpecialNonWorking),
            _ => Err(EngineError::InvalidHolidayType {
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for HolidayType {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HolidayType> for String {
    fn from(holiday: HolidayType) -> Self {
        holiday.code().to_string()
    }
}

/// One day's pay computation request.
///
/// Clock times are kept as the raw `HHMM` strings supplied by the caller;
/// they are validated when the day is computed.
///
/// # Example
///
/// ```
/// use wage_engine::models::{HolidayType, ShiftInput, WorkDay};
///
/// let input = ShiftInput {
///     day: WorkDay::new(1).unwrap(),
///     employee_name: "Juan dela Cruz".to_string(),
///     start_time: "0900".to_string(),
///     end_time: "1800".to_string(),
///     holiday_type: HolidayType::None,
/// };
/// assert!(!input.holiday_type.is_holiday());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftInput {
    /// Day index in the weekly cycle.
    pub day: WorkDay,
    /// Employee name, carried through for display.
    pub employee_name: String,
    /// Clock-in time as `HHMM`.
    pub start_time: String,
    /// Clock-out time as `HHMM`; `"0000"` means end of day.
    pub end_time: String,
    /// Holiday classification.
    #[serde(default)]
    pub holiday_type: HolidayType,
}
