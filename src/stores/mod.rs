//! Collaborator store interfaces.
//!
//! The engine consumes five external data sources: attendance records,
//! overtime requests, leave applications, calendar classification, and
//! compensation records. This module defines the async traits at those
//! seams plus in-memory implementations for tests and embedders.
//!
//! A failed query must surface as [`crate::error::EngineError::DataFetch`];
//! implementations must not substitute empty results for failures, since a
//! zeroed summary is indistinguishable from a verified zero pay period.

mod memory;

use std::future::Future;

use crate::calculation::{CalendarMarks, EvaluationWindow};
use crate::error::EngineResult;
use crate::models::{
    AttendanceRecord, CalendarScope, CompensationRecord, LeaveApplication, OvertimeRequest,
};

pub use memory::{
    InMemoryAttendanceStore, InMemoryCalendar, InMemoryCompensationStore, InMemoryLeaveStore,
    InMemoryOvertimeStore,
};

/// Source of attendance records for an officer.
pub trait AttendanceStore {
    /// Fetches all attendance records for the officer dated inside the
    /// window, open sessions included (the aggregation excludes them).
    fn attendance_records(
        &self,
        officer_id: &str,
        window: &EvaluationWindow,
    ) -> impl Future<Output = EngineResult<Vec<AttendanceRecord>>> + Send;
}

/// Source of overtime requests for an officer.
pub trait OvertimeStore {
    /// Fetches overtime requests for the officer dated inside the window.
    ///
    /// Implementations may pre-filter to approved requests; the
    /// aggregation filters again, so returning every status is also fine.
    fn overtime_requests(
        &self,
        officer_id: &str,
        window: &EvaluationWindow,
    ) -> impl Future<Output = EngineResult<Vec<OvertimeRequest>>> + Send;
}

/// Source of approved leave applications for an officer.
pub trait LeaveStore {
    /// Fetches approved leave applications overlapping the window.
    fn approved_leaves(
        &self,
        officer_id: &str,
        window: &EvaluationWindow,
    ) -> impl Future<Output = EngineResult<Vec<LeaveApplication>>> + Send;
}

/// Calendar classification service.
pub trait CalendarService {
    /// Returns the weekend and holiday dates for the scope and window.
    ///
    /// Callers treat the two sets as mutually exclusive with weekend
    /// priority; see [`crate::calculation::classify_date`].
    fn classify(
        &self,
        scope: &CalendarScope,
        window: &EvaluationWindow,
    ) -> impl Future<Output = EngineResult<CalendarMarks>> + Send;
}

/// Source of per-officer compensation records.
pub trait CompensationStore {
    /// Fetches the compensation record for an officer, if one exists.
    ///
    /// A missing record is `Ok(None)`, not an error; the engine
    /// soft-defaults the salary to zero and flags the result as
    /// incomplete.
    fn compensation(
        &self,
        officer_id: &str,
    ) -> impl Future<Output = EngineResult<Option<CompensationRecord>>> + Send;
}
