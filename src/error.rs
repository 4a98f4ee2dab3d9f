//! Error types for the wage engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while computing daily pay.

use thiserror::Error;

/// The main error type for the wage engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use wage_engine::error::EngineError;
///
/// let error = EngineError::InvalidTimeFormat {
///     value: "2500".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid time format '2500': expected HHMM in 24-hour form"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A clock time was not a valid HHMM value.
    #[error("Invalid time format '{value}': expected HHMM in 24-hour form")]
    InvalidTimeFormat {
        /// The rejected input.
        value: String,
    },

    /// The day index was outside the weekly cycle.
    #[error("Invalid day {day}: expected a value from 1 to 7")]
    InvalidDay {
        /// The rejected day index.
        day: i64,
    },

    /// The same day appeared more than once in a weekly payroll.
    #[error("Day {day} appears more than once")]
    DuplicateDay {
        /// The repeated day index.
        day: u8,
    },

    /// The holiday type was not one of the recognised codes.
    #[error("Invalid holiday type '{value}': expected \"\", \"HD\" or \"SNWH\"")]
    InvalidHolidayType {
        /// The rejected input.
        value: String,
    },

    /// No pay rule covers the combination of day, holiday and start time.
    #[error(
        "Unsupported combination: {day_type} day, holiday '{holiday_type}', start {start_time}, {overtime_hours} overtime hours"
    )]
    UnsupportedCombination {
        /// The day type ("regular" or "rest").
        day_type: String,
        /// The holiday code ("" when not a holiday).
        holiday_type: String,
        /// The clock-in time in HHMM form.
        start_time: String,
        /// The raw overtime hours for the day.
        overtime_hours: i64,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A configuration value was out of range.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

impl EngineError {
    /// Builds an [`EngineError::InvalidTimeFormat`] for the given input.
    pub fn invalid_time(value: impl Into<String>) -> Self {
        EngineError::InvalidTimeFormat {
            value: value.into(),
        }
    }

    /// Returns a stable machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::InvalidTimeFormat { .. } => "INVALID_TIME_FORMAT",
            EngineError::InvalidDay { .. } => "INVALID_DAY",
            EngineError::DuplicateDay { .. } => "DUPLICATE_DAY",
            EngineError::InvalidHolidayType { .. } => "INVALID_HOLIDAY_TYPE",
            EngineError::UnsupportedCombination { .. } => "UNSUPPORTED_COMBINATION",
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::InvalidConfig { .. } => "CONFIG_ERROR",
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
