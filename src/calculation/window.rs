//! Evaluation window handling.
//!
//! This module defines the inclusive date window over which an officer's
//! attendance is summarized, and the month arithmetic used by rate
//! derivation.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// An inclusive date range over which attendance is evaluated.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::EvaluationWindow;
/// use chrono::NaiveDate;
///
/// let as_of = NaiveDate::from_ymd_opt(2025, 7, 18).unwrap();
/// let window = EvaluationWindow::month_to_date(as_of);
/// assert_eq!(window.start(), NaiveDate::from_ymd_opt(2025, 7, 1).unwrap());
/// assert_eq!(window.end(), as_of);
/// assert_eq!(window.num_days(), 18);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl EvaluationWindow {
    /// Creates a window from inclusive start and end dates.
    ///
    /// Returns [`EngineError::InvalidDateRange`] when `start` is after
    /// `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> EngineResult<Self> {
        if start > end {
            return Err(EngineError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates the month-to-date window for `as_of`.
    ///
    /// The window runs from the first day of `as_of`'s month through
    /// `as_of` itself, so the end date never passes "today" even though
    /// the month may not be over.
    pub fn month_to_date(as_of: NaiveDate) -> Self {
        let start = as_of
            .with_day(1)
            .expect("day 1 exists in every month");
        Self { start, end: as_of }
    }

    /// The first day of the window (inclusive).
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// The last day of the window (inclusive).
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns true if the date falls inside the window.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// The number of calendar days in the window.
    pub fn num_days(&self) -> u32 {
        (self.end - self.start).num_days() as u32 + 1
    }

    /// Iterates every calendar date in the window in order.
    pub fn iter_days(self) -> impl Iterator<Item = NaiveDate> {
        self.start.iter_days().take_while(move |d| d <= &self.end)
    }
}

/// Returns the actual number of days in `date`'s month (28-31).
///
/// Leap years are respected via chrono's calendar arithmetic.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::days_in_month;
/// use chrono::NaiveDate;
///
/// assert_eq!(days_in_month(NaiveDate::from_ymd_opt(2024, 2, 10).unwrap()), 29);
/// assert_eq!(days_in_month(NaiveDate::from_ymd_opt(2025, 2, 10).unwrap()), 28);
/// assert_eq!(days_in_month(NaiveDate::from_ymd_opt(2025, 7, 10).unwrap()), 31);
/// ```
pub fn days_in_month(date: NaiveDate) -> u32 {
    let first = date.with_day(1).expect("day 1 exists in every month");
    let next_month_first = first
        .checked_add_days(Days::new(32))
        .expect("within chrono date range")
        .with_day(1)
        .expect("day 1 exists in every month");
    (next_month_first - first).num_days() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_rejects_inverted_range() {
        let result = EvaluationWindow::new(date(2025, 7, 31), date(2025, 7, 1));
        assert!(matches!(
            result,
            Err(EngineError::InvalidDateRange { .. })
        ));
    }

    #[test]
    fn test_new_accepts_single_day_window() {
        let window = EvaluationWindow::new(date(2025, 7, 1), date(2025, 7, 1)).unwrap();
        assert_eq!(window.num_days(), 1);
    }

    #[test]
    fn test_month_to_date_starts_on_first() {
        let window = EvaluationWindow::month_to_date(date(2025, 7, 18));
        assert_eq!(window.start(), date(2025, 7, 1));
        assert_eq!(window.end(), date(2025, 7, 18));
    }

    #[test]
    fn test_month_to_date_on_first_of_month() {
        let window = EvaluationWindow::month_to_date(date(2025, 7, 1));
        assert_eq!(window.num_days(), 1);
    }

    #[test]
    fn test_month_to_date_on_last_of_month() {
        let window = EvaluationWindow::month_to_date(date(2025, 7, 31));
        assert_eq!(window.num_days(), 31);
    }

    #[test]
    fn test_contains_is_inclusive_of_both_ends() {
        let window = EvaluationWindow::new(date(2025, 7, 1), date(2025, 7, 18)).unwrap();
        assert!(window.contains(date(2025, 7, 1)));
        assert!(window.contains(date(2025, 7, 18)));
        assert!(window.contains(date(2025, 7, 10)));
        assert!(!window.contains(date(2025, 6, 30)));
        assert!(!window.contains(date(2025, 7, 19)));
    }

    #[test]
    fn test_iter_days_covers_every_date_once() {
        let window = EvaluationWindow::new(date(2025, 7, 28), date(2025, 8, 3)).unwrap();
        let days: Vec<NaiveDate> = window.iter_days().collect();
        assert_eq!(days.len(), 7);
        assert_eq!(days.first(), Some(&date(2025, 7, 28)));
        assert_eq!(days.last(), Some(&date(2025, 8, 3)));
    }

    #[test]
    fn test_days_in_month_regular_months() {
        assert_eq!(days_in_month(date(2025, 1, 15)), 31);
        assert_eq!(days_in_month(date(2025, 4, 15)), 30);
        assert_eq!(days_in_month(date(2025, 6, 1)), 30);
        assert_eq!(days_in_month(date(2025, 12, 31)), 31);
    }

    #[test]
    fn test_days_in_month_february_leap_years() {
        assert_eq!(days_in_month(date(2024, 2, 1)), 29);
        assert_eq!(days_in_month(date(2025, 2, 1)), 28);
        assert_eq!(days_in_month(date(2000, 2, 1)), 29);
        assert_eq!(days_in_month(date(1900, 2, 1)), 28);
    }

    #[test]
    fn test_window_serialization_round_trip() {
        let window = EvaluationWindow::month_to_date(date(2025, 7, 18));
        let json = serde_json::to_string(&window).unwrap();
        let back: EvaluationWindow = serde_json::from_str(&json).unwrap();
        assert_eq!(back, window);
    }
}
