//! Attendance, overtime, and leave models.
//!
//! This module defines the read-only input records produced by the external
//! attendance-tracking, overtime-request, and leave-application subsystems.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Status of an attendance session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// Officer has checked in but not yet out; the session is still open.
    CheckedIn,
    /// Officer checked out normally; the session is complete.
    CheckedOut,
    /// The session was closed automatically at day end; treated as complete.
    AutoCheckout,
}

/// One attendance entry for an officer on a calendar day.
///
/// Produced by the external attendance-tracking subsystem; read-only to
/// this engine.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{AttendanceRecord, AttendanceStatus};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let record = AttendanceRecord {
///     date: NaiveDate::from_ymd_opt(2025, 7, 14).unwrap(),
///     hours_worked: Decimal::new(85, 1), // 8.5 hours
///     status: AttendanceStatus::CheckedOut,
/// };
/// assert!(record.is_completed());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The calendar day the session belongs to.
    pub date: NaiveDate,
    /// Hours worked during the session.
    pub hours_worked: Decimal,
    /// Whether the session is open or complete.
    pub status: AttendanceStatus,
}

impl AttendanceRecord {
    /// Returns true if the session was completed (checked out or
    /// auto-closed). Only completed sessions count toward presence.
    pub fn is_completed(&self) -> bool {
        matches!(
            self.status,
            AttendanceStatus::CheckedOut | AttendanceStatus::AutoCheckout
        )
    }
}

/// Review status of an overtime request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OvertimeStatus {
    /// Awaiting review; contributes nothing to pay.
    Pending,
    /// Approved by a reviewer; the requested hours are compensated.
    Approved,
    /// Rejected by a reviewer; contributes nothing to pay.
    Rejected,
}

/// A request for overtime hours on a specific day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeRequest {
    /// The day the overtime was worked.
    pub date: NaiveDate,
    /// The number of overtime hours requested.
    pub requested_hours: Decimal,
    /// The review status of the request.
    pub status: OvertimeStatus,
}

impl OvertimeRequest {
    /// Returns true if the request has been approved.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::{OvertimeRequest, OvertimeStatus};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let request = OvertimeRequest {
    ///     date: NaiveDate::from_ymd_opt(2025, 7, 14).unwrap(),
    ///     requested_hours: Decimal::new(30, 1), // 3.0 hours
    ///     status: OvertimeStatus::Approved,
    /// };
    /// assert!(request.is_approved());
    /// ```
    pub fn is_approved(&self) -> bool {
        self.status == OvertimeStatus::Approved
    }
}

/// An approved leave application.
///
/// A leave contributes its `paid_days` to the payable total only when it
/// is not marked loss-of-pay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveApplication {
    /// First day of the leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the leave (inclusive).
    pub end_date: NaiveDate,
    /// The number of paid days recorded against the application.
    pub paid_days: Decimal,
    /// Whether the leave is loss-of-pay (unpaid).
    pub is_loss_of_pay: bool,
}

impl LeaveApplication {
    /// Returns the paid days this leave contributes toward payable days.
    ///
    /// Loss-of-pay leaves contribute zero regardless of any `paid_days`
    /// value recorded against them.
    pub fn payable_days(&self) -> Decimal {
        if self.is_loss_of_pay {
            Decimal::ZERO
        } else {
            self.paid_days
        }
    }

    /// Returns true if the leave range overlaps the given inclusive range.
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.start_date <= end && self.end_date >= start
    }
}
