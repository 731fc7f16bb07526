//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during salary calculation.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the payroll engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/payroll.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/payroll.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
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

    /// A collaborator query (attendance, overtime, leave, calendar, or
    /// compensation store) failed.
    ///
    /// Fetch failures abort the calculation rather than degrading to
    /// zero-valued output, since a zeroed result is indistinguishable
    /// from a verified zero pay period.
    #[error("Data fetch from {store} store failed: {message}")]
    DataFetch {
        /// The collaborator store that failed.
        store: String,
        /// A description of the failure.
        message: String,
    },

    /// A date range was inverted (start after end).
    #[error("Invalid date range: {start} is after {end}")]
    InvalidDateRange {
        /// The start date of the invalid range.
        start: NaiveDate,
        /// The end date of the invalid range.
        end: NaiveDate,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

impl EngineError {
    /// Creates a [`EngineError::DataFetch`] for the named store.
    pub fn fetch(store: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::DataFetch {
            store: store.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/payroll.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/payroll.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_data_fetch_displays_store_and_message() {
        let error = EngineError::fetch("attendance", "connection refused");
        assert_eq!(
            error.to_string(),
            "Data fetch from attendance store failed: connection refused"
        );
    }

    #[test]
    fn test_invalid_date_range_displays_dates() {
        let error = EngineError::InvalidDateRange {
            start: NaiveDate::from_ymd_opt(2025, 7, 31).unwrap(),
            end: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid date range: 2025-07-31 is after 2025-07-01"
        );
    }

    #[test]
    fn test_calculation_error_displays_message() {
        let error = EngineError::CalculationError {
            message: "negative payable days".to_string(),
        };
        assert_eq!(error.to_string(), "Calculation error: negative payable days");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_fetch_error() -> EngineResult<()> {
            Err(EngineError::fetch("leave", "timeout"))
        }

        fn propagates_error() -> EngineResult<()> {
            returns_fetch_error()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
