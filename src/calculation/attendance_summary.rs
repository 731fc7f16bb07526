//! Payable-days calculation.
//!
//! This module combines fetched attendance records, overtime requests,
//! approved leaves, and calendar marks into an [`AttendanceSummary`] for
//! one officer and one evaluation window.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{AttendanceRecord, AttendanceSummary, LeaveApplication, OvertimeRequest};

use super::day_classification::{CalendarMarks, DayClass, classify_date};
use super::window::EvaluationWindow;

/// Builds the attendance summary for one officer and window.
///
/// The inputs are the already-fetched collaborator query results:
///
/// 1. `days_present` counts distinct dates inside the window carrying at
///    least one completed (checked-out or auto-checkout) session; open
///    sessions are excluded.
/// 2. `total_hours_worked` sums `hours_worked` over those completed
///    sessions.
/// 3. `approved_overtime_hours` sums requested hours over approved
///    requests dated inside the window.
/// 4. One sweep over every calendar date in the window tallies weekends
///    and holidays; the weekend check precedes the holiday check, so a
///    holiday falling on a weekend counts once, under weekends.
/// 5. `paid_leave_days` sums `paid_days` over non-loss-of-pay leaves
///    overlapping the window. The overlap is not clipped: a leave
///    spanning into the next month contributes its full `paid_days`.
///
/// Presence is tallied independently of the weekend/holiday sweep, so a
/// date with a completed session that is also marked as a weekend
/// contributes to both `days_present` and `weekends`.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{
///     CalendarMarks, EvaluationWindow, build_attendance_summary,
/// };
/// use payroll_engine::models::{AttendanceRecord, AttendanceStatus};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let window = EvaluationWindow::month_to_date(
///     NaiveDate::from_ymd_opt(2025, 7, 2).unwrap(),
/// );
/// let records = vec![AttendanceRecord {
///     date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
///     hours_worked: Decimal::new(80, 1),
///     status: AttendanceStatus::CheckedOut,
/// }];
///
/// let summary =
///     build_attendance_summary(&records, &[], &[], &CalendarMarks::default(), &window);
/// assert_eq!(summary.days_present, 1);
/// assert_eq!(summary.payable_days, Decimal::ONE);
/// ```
pub fn build_attendance_summary(
    records: &[AttendanceRecord],
    overtime_requests: &[OvertimeRequest],
    leaves: &[LeaveApplication],
    marks: &CalendarMarks,
    window: &EvaluationWindow,
) -> AttendanceSummary {
    let mut present_dates: BTreeSet<NaiveDate> = BTreeSet::new();
    let mut total_hours_worked = Decimal::ZERO;
    for record in records {
        if record.is_completed() && window.contains(record.date) {
            present_dates.insert(record.date);
            total_hours_worked += record.hours_worked;
        }
    }
    let days_present = present_dates.len() as u32;

    let approved_overtime_hours: Decimal = overtime_requests
        .iter()
        .filter(|r| r.is_approved() && window.contains(r.date))
        .map(|r| r.requested_hours)
        .sum();

    let mut weekends = 0u32;
    let mut paid_holidays = 0u32;
    for date in window.iter_days() {
        match classify_date(marks, date) {
            DayClass::Weekend => weekends += 1,
            DayClass::Holiday => paid_holidays += 1,
            DayClass::Workday => {}
        }
    }

    let paid_leave_days: Decimal = leaves
        .iter()
        .filter(|l| l.overlaps(window.start(), window.end()))
        .map(|l| l.payable_days())
        .sum();

    let payable_days =
        Decimal::from(days_present + paid_holidays + weekends) + paid_leave_days;

    AttendanceSummary {
        days_present,
        total_hours_worked,
        approved_overtime_hours,
        paid_holidays,
        paid_leave_days,
        weekends,
        payable_days,
    }
}
