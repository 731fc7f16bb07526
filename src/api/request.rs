//! Request types for the payroll engine API.
//!
//! This module defines the JSON request structure for the `/calculate`
//! endpoint. The caller supplies already-fetched collaborator data; the
//! endpoint runs the pure calculation pipeline over it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::CalendarMarks;
use crate::models::{AttendanceRecord, CompensationRecord, LeaveApplication, OvertimeRequest};

/// Request body for the `/calculate` endpoint.
///
/// Contains everything needed to compute month-to-date earnings for one
/// officer: the evaluation reference date, the officer's compensation
/// record (absent when none exists), and the fetched attendance,
/// overtime, leave, and calendar data for the month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The officer the calculation is for.
    pub officer_id: String,
    /// The reference date; the window runs from the first of its month
    /// through this date.
    pub as_of: NaiveDate,
    /// The officer's compensation record, if one exists.
    #[serde(default)]
    pub compensation: Option<CompensationRecord>,
    /// Attendance records for the month (open sessions included; the
    /// aggregation excludes them).
    #[serde(default)]
    pub attendance_records: Vec<AttendanceRecord>,
    /// Overtime requests for the month, any status.
    #[serde(default)]
    pub overtime_requests: Vec<OvertimeRequest>,
    /// Approved leave applications overlapping the month.
    #[serde(default)]
    pub leave_applications: Vec<LeaveApplication>,
    /// Weekend and holiday dates for the month.
    #[serde(default)]
    pub calendar: CalendarMarks,
}
