//! Calendar day classification logic.
//!
//! This module provides the closed day-class tag used by the payable-days
//! sweep and the [`CalendarMarks`] container returned by the calendar
//! classification service.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The classification of a calendar date for payability purposes.
///
/// Every date in an evaluation window maps to exactly one class. Weekend
/// classification takes priority over holiday classification when a
/// holiday falls on a weekend.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::DayClass;
///
/// let class = DayClass::Weekend;
/// assert_eq!(format!("{:?}", class), "Weekend");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayClass {
    /// An ordinary working day.
    Workday,
    /// A weekend day; paid without attendance.
    Weekend,
    /// A declared holiday; paid without attendance.
    Holiday,
}

impl std::fmt::Display for DayClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayClass::Workday => write!(f, "Workday"),
            DayClass::Weekend => write!(f, "Weekend"),
            DayClass::Holiday => write!(f, "Holiday"),
        }
    }
}

/// Weekend and holiday dates for a scope and date range.
///
/// Returned by the calendar classification service. The two sets may
/// overlap at the source (a holiday declared on a weekend);
/// [`classify_date`] resolves the overlap in favor of the weekend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarMarks {
    /// Weekend dates within the range.
    pub weekends: BTreeSet<NaiveDate>,
    /// Declared holiday dates within the range.
    pub holidays: BTreeSet<NaiveDate>,
}

impl CalendarMarks {
    /// Returns true if the date is marked as a weekend.
    pub fn is_weekend(&self, date: NaiveDate) -> bool {
        self.weekends.contains(&date)
    }

    /// Returns true if the date is marked as a holiday.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains(&date)
    }
}

/// Classifies a date into exactly one [`DayClass`].
///
/// The weekend check precedes the holiday check, so a holiday declared on
/// a weekend classifies as [`DayClass::Weekend`] and is counted once.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{classify_date, CalendarMarks, DayClass};
/// use chrono::NaiveDate;
///
/// let mut marks = CalendarMarks::default();
/// let saturday = NaiveDate::from_ymd_opt(2025, 7, 5).unwrap();
/// marks.weekends.insert(saturday);
/// marks.holidays.insert(saturday); // holiday declared on a weekend
///
/// assert_eq!(classify_date(&marks, saturday), DayClass::Weekend);
/// ```
pub fn classify_date(marks: &CalendarMarks, date: NaiveDate) -> DayClass {
    if marks.is_weekend(date) {
        DayClass::Weekend
    } else if marks.is_holiday(date) {
        DayClass::Holiday
    } else {
        DayClass::Workday
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn marks_with(weekends: &[NaiveDate], holidays: &[NaiveDate]) -> CalendarMarks {
        CalendarMarks {
            weekends: weekends.iter().copied().collect(),
            holidays: holidays.iter().copied().collect(),
        }
    }

    // ==========================================================================
    // DC-001: unmarked date is a workday
    // ==========================================================================
    #[test]
    fn test_dc_001_unmarked_date_is_workday() {
        let marks = CalendarMarks::default();
        assert_eq!(classify_date(&marks, date(2025, 7, 14)), DayClass::Workday);
    }

    // ==========================================================================
    // DC-002: weekend-only date is a weekend
    // ==========================================================================
    #[test]
    fn test_dc_002_weekend_only_is_weekend() {
        let saturday = date(2025, 7, 5);
        let marks = marks_with(&[saturday], &[]);
        assert_eq!(classify_date(&marks, saturday), DayClass::Weekend);
    }

    // ==========================================================================
    // DC-003: holiday-only date is a holiday
    // ==========================================================================
    #[test]
    fn test_dc_003_holiday_only_is_holiday() {
        let holiday = date(2025, 8, 15);
        let marks = marks_with(&[], &[holiday]);
        assert_eq!(classify_date(&marks, holiday), DayClass::Holiday);
    }

    // ==========================================================================
    // DC-004: weekend takes priority over holiday
    // ==========================================================================
    #[test]
    fn test_dc_004_weekend_priority_over_holiday() {
        let saturday = date(2025, 7, 5);
        let marks = marks_with(&[saturday], &[saturday]);
        assert_eq!(classify_date(&marks, saturday), DayClass::Weekend);
    }

    #[test]
    fn test_classification_is_exhaustive_over_marks() {
        let saturday = date(2025, 7, 5);
        let holiday = date(2025, 7, 7);
        let workday = date(2025, 7, 8);
        let marks = marks_with(&[saturday], &[holiday]);

        assert_eq!(classify_date(&marks, saturday), DayClass::Weekend);
        assert_eq!(classify_date(&marks, holiday), DayClass::Holiday);
        assert_eq!(classify_date(&marks, workday), DayClass::Workday);
    }

    #[test]
    fn test_day_class_display() {
        assert_eq!(format!("{}", DayClass::Workday), "Workday");
        assert_eq!(format!("{}", DayClass::Weekend), "Weekend");
        assert_eq!(format!("{}", DayClass::Holiday), "Holiday");
    }

    #[test]
    fn test_day_class_serialization() {
        let weekend = DayClass::Weekend;
        let json = serde_json::to_string(&weekend).unwrap();
        assert_eq!(json, "\"weekend\"");

        let deserialized: DayClass = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, DayClass::Weekend);
    }

    #[test]
    fn test_calendar_marks_serialization() {
        let marks = marks_with(&[date(2025, 7, 5)], &[date(2025, 8, 15)]);

        let json = serde_json::to_string(&marks).unwrap();
        assert!(json.contains("2025-07-05"));
        assert!(json.contains("2025-08-15"));

        let deserialized: CalendarMarks = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, marks);
    }
}
