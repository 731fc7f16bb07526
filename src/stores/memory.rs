//! In-memory store implementations.
//!
//! These back the integration tests and benches, and serve as reference
//! implementations for embedders wiring the engine to a real data source.

use std::collections::{BTreeSet, HashMap};

use chrono::{Datelike, NaiveDate, Weekday};

use crate::calculation::{CalendarMarks, EvaluationWindow};
use crate::error::EngineResult;
use crate::models::{
    AttendanceRecord, CalendarScope, CompensationRecord, LeaveApplication, OvertimeRequest,
};

use super::{AttendanceStore, CalendarService, CompensationStore, LeaveStore, OvertimeStore};

/// In-memory attendance store keyed by officer id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAttendanceStore {
    records: HashMap<String, Vec<AttendanceRecord>>,
}

impl InMemoryAttendanceStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record for the officer.
    pub fn insert(&mut self, officer_id: impl Into<String>, record: AttendanceRecord) {
        self.records.entry(officer_id.into()).or_default().push(record);
    }
}

impl AttendanceStore for InMemoryAttendanceStore {
    async fn attendance_records(
        &self,
        officer_id: &str,
        window: &EvaluationWindow,
    ) -> EngineResult<Vec<AttendanceRecord>> {
        Ok(self
            .records
            .get(officer_id)
            .map(|records| {
                records
                    .iter()
                    .filter(|r| window.contains(r.date))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}

/// In-memory overtime store keyed by officer id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOvertimeStore {
    requests: HashMap<String, Vec<OvertimeRequest>>,
}

impl InMemoryOvertimeStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a request for the officer.
    pub fn insert(&mut self, officer_id: impl Into<String>, request: OvertimeRequest) {
        self.requests.entry(officer_id.into()).or_default().push(request);
    }
}

impl OvertimeStore for InMemoryOvertimeStore {
    async fn overtime_requests(
        &self,
        officer_id: &str,
        window: &EvaluationWindow,
    ) -> EngineResult<Vec<OvertimeRequest>> {
        Ok(self
            .requests
            .get(officer_id)
            .map(|requests| {
                requests
                    .iter()
                    .filter(|r| window.contains(r.date))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}

/// In-memory leave store keyed by applicant id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLeaveStore {
    leaves: HashMap<String, Vec<LeaveApplication>>,
}

impl InMemoryLeaveStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an approved leave for the officer.
    pub fn insert(&mut self, officer_id: impl Into<String>, leave: LeaveApplication) {
        self.leaves.entry(officer_id.into()).or_default().push(leave);
    }
}

impl LeaveStore for InMemoryLeaveStore {
    async fn approved_leaves(
        &self,
        officer_id: &str,
        window: &EvaluationWindow,
    ) -> EngineResult<Vec<LeaveApplication>> {
        Ok(self
            .leaves
            .get(officer_id)
            .map(|leaves| {
                leaves
                    .iter()
                    .filter(|l| l.overlaps(window.start(), window.end()))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}

/// In-memory calendar service.
///
/// Weekends are computed from the configured weekend weekdays; holidays
/// are looked up per scope, with institution scopes falling back to the
/// company-wide holiday set when no institution calendar is stored.
#[derive(Debug, Clone)]
pub struct InMemoryCalendar {
    weekend_days: Vec<Weekday>,
    holidays: HashMap<CalendarScope, BTreeSet<NaiveDate>>,
}

impl InMemoryCalendar {
    /// Creates a calendar with the given weekend weekdays.
    pub fn new(weekend_days: Vec<Weekday>) -> Self {
        Self {
            weekend_days,
            holidays: HashMap::new(),
        }
    }

    /// Declares a holiday for the scope.
    pub fn insert_holiday(&mut self, scope: CalendarScope, date: NaiveDate) {
        self.holidays.entry(scope).or_default().insert(date);
    }

    fn holidays_for(&self, scope: &CalendarScope) -> Option<&BTreeSet<NaiveDate>> {
        self.holidays
            .get(scope)
            .or_else(|| self.holidays.get(&CalendarScope::Company))
    }
}

impl CalendarService for InMemoryCalendar {
    async fn classify(
        &self,
        scope: &CalendarScope,
        window: &EvaluationWindow,
    ) -> EngineResult<CalendarMarks> {
        let mut marks = CalendarMarks::default();

        for date in window.iter_days() {
            if self.weekend_days.contains(&date.weekday()) {
                marks.weekends.insert(date);
            }
        }

        if let Some(holidays) = self.holidays_for(scope) {
            for date in holidays {
                if window.contains(*date) {
                    marks.holidays.insert(*date);
                }
            }
        }

        Ok(marks)
    }
}

/// In-memory compensation store keyed by officer id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCompensationStore {
    records: HashMap<String, CompensationRecord>,
}

impl InMemoryCompensationStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) the compensation record for an officer.
    pub fn insert(&mut self, record: CompensationRecord) {
        self.records.insert(record.officer_id.clone(), record);
    }
}

impl CompensationStore for InMemoryCompensationStore {
    async fn compensation(
        &self,
        officer_id: &str,
    ) -> EngineResult<Option<CompensationRecord>> {
        Ok(self.records.get(officer_id).cloned())
    }
}
